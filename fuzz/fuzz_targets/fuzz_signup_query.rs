//! Fuzz target: query-string extraction for `/signup` and `/unregister`.
//!
//! Arbitrary bytes become the query part of a signup URI. Parsing may
//! reject the input, but it must never panic.

#![no_main]

use axum::{extract::Query, http::Uri};
use libfuzzer_sys::fuzz_target;
use mergington_gateway::routes::EmailQuery;

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(uri) = format!("/activities/Chess%20Club/signup?{query}").parse::<Uri>() else {
        return;
    };
    let _ = Query::<EmailQuery>::try_from_uri(&uri);
});
