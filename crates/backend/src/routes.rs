use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(handlers::system::health))
        // ========================================
        // RECORD COLLECTIONS
        // ========================================
        .route(
            "/api/:resource",
            get(handlers::records::list).post(handlers::records::create),
        )
        .route(
            "/api/:resource/:id",
            get(handlers::records::get_by_id)
                .put(handlers::records::update)
                .delete(handlers::records::delete),
        )
}
