use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

pub const GREETING: &str = "Hello from Node.js Docker App!";
pub const TESTING_GREETING: &str = "Hello from Node.js Docker App testing api!";

/// Paths served by [`testing`]. These were added while trying out the
/// deployment pipeline and are candidates for removal.
pub const TESTING_PATHS: &[&str] = &["/test", "/testing", "/gdgdfgdg", "/ci-cd", "/he"];

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING,
        timestamp: now_iso8601(),
        environment: state.environment(),
    })
}

pub async fn testing() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: TESTING_GREETING,
        timestamp: now_iso8601(),
        environment: None,
    })
}

/// UTC time with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
