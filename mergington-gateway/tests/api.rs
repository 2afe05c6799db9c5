//! End-to-end tests for the activity API, driven through the axum router.
//!
//! Every test builds its own seeded directory, so signups made in one test
//! are never visible to another.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use mergington_gateway::{routes::api_router, state::SharedDirectory};
use serde_json::Value;
use tower::ServiceExt;

const SEEDED_NAMES: [&str; 9] = [
    "Chess Club",
    "Programming Class",
    "Gym Class",
    "Basketball Team",
    "Soccer Club",
    "Art Club",
    "Drama Club",
    "Debate Team",
    "Math Club",
];

fn app() -> Router {
    api_router(Arc::new(SharedDirectory::seeded()))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|e| panic!("failed to build request: {e}"));
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .unwrap_or_else(|e| panic!("handler error: {e}"));
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .unwrap_or_else(|e| panic!("failed to read body: {e}"));
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, body) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    match body[activity]["participants"].as_array() {
        Some(list) => list
            .iter()
            .map(|v| v.as_str().unwrap_or_default().to_owned())
            .collect(),
        None => panic!("{activity} has no participants list"),
    }
}

// ── GET /activities ───────────────────────────────────────────────────────────

#[tokio::test]
async fn list_activities_returns_object_of_all_seeded_activities() {
    let (status, body) = send(&app(), Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    let activities = match body.as_object() {
        Some(map) => map,
        None => panic!("expected a JSON object, got {body}"),
    };
    for name in SEEDED_NAMES {
        assert!(activities.contains_key(name), "{name} missing from listing");
    }
}

#[tokio::test]
async fn every_activity_has_required_fields() {
    let (_, body) = send(&app(), Method::GET, "/activities").await;
    let activities = match body.as_object() {
        Some(map) => map,
        None => panic!("expected a JSON object, got {body}"),
    };
    for (name, details) in activities {
        assert!(details["description"].is_string(), "{name} lacks description");
        assert!(details["schedule"].is_string(), "{name} lacks schedule");
        assert!(details["max_participants"].is_u64(), "{name} lacks max_participants");
        assert!(details["participants"].is_array(), "{name} participants must be a list");
    }
}

#[tokio::test]
async fn preconfigured_participants_are_listed() {
    let app = app();
    let expected = [
        ("Chess Club", ["michael@mergington.edu", "daniel@mergington.edu"]),
        ("Programming Class", ["emma@mergington.edu", "sophia@mergington.edu"]),
        ("Gym Class", ["john@mergington.edu", "olivia@mergington.edu"]),
    ];
    for (activity, members) in expected {
        let listed = participants(&app, activity).await;
        for email in members {
            assert!(listed.iter().any(|p| p == email), "{email} missing from {activity}");
        }
    }
}

#[tokio::test]
async fn list_activities_keeps_seed_order() {
    let req = Request::builder()
        .uri("/activities")
        .body(Body::empty())
        .unwrap_or_else(|e| panic!("failed to build request: {e}"));
    let resp = app()
        .oneshot(req)
        .await
        .unwrap_or_else(|e| panic!("handler error: {e}"));
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .unwrap_or_else(|e| panic!("failed to read body: {e}"));
    let raw = String::from_utf8_lossy(&bytes);

    let positions: Vec<usize> = SEEDED_NAMES
        .iter()
        .map(|name| {
            raw.find(&format!("\"{name}\":"))
                .unwrap_or_else(|| panic!("{name} missing from listing"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "activities must be listed in seed order: {positions:?}"
    );
}

// ── POST /activities/{name}/signup ────────────────────────────────────────────

#[tokio::test]
async fn signup_adds_student_and_returns_message() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Soccer%20Club/signup?email=player@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "player@mergington.edu signed up for Soccer Club");
    assert!(participants(&app, "Soccer Club")
        .await
        .contains(&"player@mergington.edu".to_owned()));
}

#[tokio::test]
async fn signup_keeps_existing_members_in_order() {
    let app = app();
    let (status, _) = send(&app, Method::POST, "/activities/Chess%20Club/signup?email=new@x.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        participants(&app, "Chess Club").await,
        ["michael@mergington.edu", "daniel@mergington.edu", "new@x.edu"]
    );
}

#[tokio::test]
async fn duplicate_signup_returns_400_already_signed_up() {
    let app = app();
    let uri = "/activities/Art%20Club/signup?email=duplicate@mergington.edu";
    let (first, _) = send(&app, Method::POST, uri).await;
    assert_eq!(first, StatusCode::OK);

    let (second, body) = send(&app, Method::POST, uri).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.contains("already signed up"), "unexpected detail: {detail}");
    assert_eq!(participants(&app, "Art Club").await.len(), 1);
}

#[tokio::test]
async fn signup_for_unknown_activity_returns_404() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/activities/Nonexistent%20Activity/signup?email=test@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let detail = body["detail"].as_str().unwrap_or_default().to_lowercase();
    assert!(detail.contains("not found"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn activity_names_are_case_sensitive() {
    let (status, _) = send(&app(), Method::POST, "/activities/chess%20club/signup?email=a@x.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signup_without_email_is_unprocessable() {
    let (status, body) = send(&app(), Method::POST, "/activities/Art%20Club/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap_or_default().contains("email"));
}

#[tokio::test]
async fn repeated_email_parameter_is_unprocessable() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Art%20Club/signup?email=a@x.edu&email=b@x.edu",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.contains("email"), "unexpected detail: {detail}");
    assert!(participants(&app, "Art Club").await.is_empty(), "nobody may be signed up");
}

// ── POST /activities/{name}/unregister ────────────────────────────────────────

#[tokio::test]
async fn unregister_removes_student_and_returns_message() {
    let app = app();
    let email = "removed@mergington.edu";
    let (status, _) = send(&app, Method::POST, &format!("/activities/Debate%20Team/signup?email={email}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(participants(&app, "Debate Team").await.contains(&email.to_owned()));

    let (status, body) = send(&app, Method::POST, &format!("/activities/Debate%20Team/unregister?email={email}")).await;
    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains(email), "message must name the email: {message}");
    assert!(message.contains("Debate Team"), "message must name the activity: {message}");
    assert!(!participants(&app, "Debate Team").await.contains(&email.to_owned()));
}

#[tokio::test]
async fn signup_then_unregister_restores_roster() {
    let app = app();
    let before = participants(&app, "Gym Class").await;
    let (signed, _) = send(&app, Method::POST, "/activities/Gym%20Class/signup?email=temp@mergington.edu").await;
    let (left, _) = send(&app, Method::POST, "/activities/Gym%20Class/unregister?email=temp@mergington.edu").await;
    assert_eq!((signed, left), (StatusCode::OK, StatusCode::OK));
    assert_eq!(participants(&app, "Gym Class").await, before);
}

#[tokio::test]
async fn unregister_non_participant_returns_400_not_signed_up() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/activities/Chess%20Club/unregister?email=notregistered@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.contains("not signed up"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn unregister_from_unknown_activity_returns_404() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/activities/Nonexistent%20Activity/unregister?email=test@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let detail = body["detail"].as_str().unwrap_or_default().to_lowercase();
    assert!(detail.contains("not found"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn separate_routers_do_not_share_state() {
    let first = app();
    let (status, _) = send(&first, Method::POST, "/activities/Math%20Club/signup?email=solo@x.edu").await;
    assert_eq!(status, StatusCode::OK);
    let second = app();
    assert!(participants(&second, "Math Club").await.is_empty());
}
