pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::feasibility::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .nest("/api", api_router())
        .with_state(state)
}

/// Routes under `/api`. Cross-origin calls are allowed from any origin here only.
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/feasibility/prefill", post(handlers::handle_prefill))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
