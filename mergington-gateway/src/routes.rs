//! Axum route handlers for the activity signup API.

use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use indexmap::IndexMap;
use mergington_core::Activity;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{error::GatewayError, state::SharedDirectory};

// ── Shared state ─────────────────────────────────────────────────────────────

type Directory = Arc<SharedDirectory>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query string accepted by `/signup` and `/unregister`.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Body of a successful signup or unregister.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the API router over `directory`, without the static page.
pub fn api_router(directory: Directory) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", post(unregister))
        .route("/health", get(health))
        .with_state(directory)
}

/// Build the full application: the API, the static signup page under
/// `/static`, and a redirect from `/` to the page.
pub fn create_router(directory: Directory, static_dir: &FsPath) -> Router {
    api_router(directory)
        .route("/", get(root))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /` — send browsers to the signup page.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /activities` — every activity with its current roster, in seed order.
pub async fn list_activities(State(directory): State<Directory>) -> Json<IndexMap<String, Activity>> {
    Json(directory.snapshot())
}

/// `POST /activities/:name/signup?email=` — add a student to an activity.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `email` is missing, or
/// [`GatewayError::Directory`] if the activity is unknown or the student is
/// already signed up.
pub async fn signup(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = required_email(query)?;
    directory.enroll(&name, &email).inspect_err(|e| {
        warn!(activity = %name, email = %email, error = %e, "signup rejected");
    })?;
    info!(activity = %name, email = %email, "student signed up");
    Ok(Json(MessageResponse {
        message: format!("{email} signed up for {name}"),
    }))
}

/// `POST /activities/:name/unregister?email=` — remove a student from an
/// activity.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `email` is missing, or
/// [`GatewayError::Directory`] if the activity is unknown or the student is
/// not signed up.
pub async fn unregister(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = required_email(query)?;
    directory.withdraw(&name, &email).inspect_err(|e| {
        warn!(activity = %name, email = %email, error = %e, "unregister rejected");
    })?;
    info!(activity = %name, email = %email, "student unregistered");
    Ok(Json(MessageResponse {
        message: format!("{email} unregistered from {name}"),
    }))
}

fn required_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, GatewayError> {
    let Query(EmailQuery { email }) =
        query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    email.ok_or_else(|| {
        GatewayError::InvalidRequest("missing required query parameter 'email'".to_owned())
    })
}
