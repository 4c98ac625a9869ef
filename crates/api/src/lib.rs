//! HTTP API server with observability for the bookstore.
//!
//! Provides REST endpoints for the catalog, carts, wishlists, orders,
//! checkout and gifting, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::{AppState, create_default_state};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/books",
            get(routes::books::list).post(routes::books::create),
        )
        .route(
            "/books/{id}",
            get(routes::books::get)
                .put(routes::books::update)
                .delete(routes::books::delete),
        )
        .route(
            "/carts",
            get(routes::carts::list).post(routes::carts::create),
        )
        .route(
            "/carts/{id}",
            get(routes::carts::get)
                .put(routes::carts::update)
                .delete(routes::carts::delete),
        )
        .route("/carts/{id}/items", post(routes::carts::add_item))
        .route(
            "/carts/{id}/items/{item_id}",
            put(routes::carts::update_item).delete(routes::carts::delete_item),
        )
        .route("/carts/{id}/checkout", post(routes::carts::checkout))
        .route("/customers/{id}/cart", get(routes::carts::for_customer))
        .route(
            "/wishlists",
            get(routes::wishlists::list).post(routes::wishlists::create),
        )
        .route(
            "/wishlists/{id}",
            get(routes::wishlists::get)
                .put(routes::wishlists::update)
                .delete(routes::wishlists::delete),
        )
        .route("/wishlists/{id}/items", post(routes::wishlists::add_item))
        .route(
            "/wishlists/{id}/items/{item_id}",
            put(routes::wishlists::update_item).delete(routes::wishlists::delete_item),
        )
        .route("/wishlists/{id}/gift", post(routes::wishlists::gift))
        .route(
            "/customers/{id}/wishlist",
            get(routes::wishlists::for_customer),
        )
        .route("/customers/{id}/orders", get(routes::orders::for_customer))
        .route(
            "/orders",
            get(routes::orders::list).post(routes::orders::create),
        )
        .route(
            "/orders/{id}",
            get(routes::orders::get)
                .put(routes::orders::update)
                .delete(routes::orders::delete),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
