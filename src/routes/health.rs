use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        uptime: state.uptime_secs(),
        environment: state.environment(),
    })
}
