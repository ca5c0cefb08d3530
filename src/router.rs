use std::sync::Arc;

use axum::{routing, Router};
use tower_http::trace::TraceLayer;

use crate::{
    app_state::AppState,
    handlers::{compare_handler, find_handler},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/find", routing::get(find_handler))
        .route("/compare", routing::get(compare_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
