use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod greeting;
pub mod health;

pub fn create_router(state: AppState) -> Router<()> {
    let testing_routes = greeting::TESTING_PATHS
        .iter()
        .fold(Router::new(), |router, path| {
            router.route(path, get(greeting::testing))
        });

    Router::new()
        .route("/", get(greeting::index))
        .merge(testing_routes)
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
