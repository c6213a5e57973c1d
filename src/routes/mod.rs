pub mod api_routes;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{health_handler, history_handler};
use crate::service::history_service::HistoryService;

/// Routes of the development history server.
///
/// CORS is wide open: the widget is served from a different origin.
pub fn router(service: HistoryService) -> Router {
    Router::new()
        .route("/assignment/chat", get(history_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
