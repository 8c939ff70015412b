//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{api::releases, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route(
            "/releases",
            get(releases::list_releases).post(releases::create_release),
        )
        .route(
            "/releases/:version",
            get(releases::get_release).delete(releases::delete_release),
        )
        .route("/analysis/:version", get(releases::analyze_release))
        .with_state(state)
}
