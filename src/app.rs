use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/faq", get(handlers::faq))
        .route("/reports", get(handlers::reports))
        .route("/reports/:report_id", get(handlers::report_detail))
        .fallback(handlers::not_found)
        .with_state(state)
}
