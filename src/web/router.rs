//! The fixed path → template route table

use axum::routing::get;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::pages;
use super::state::AppState;
use super::subsystem::{mount_route_sets, RouteSet};

/// Create the application router: the page routes, the fallback 404, and
/// every subsystem mounted under its prefix
pub fn create_router(state: AppState, route_sets: &[Box<dyn RouteSet>]) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(pages::home))
        .route("/login", get(pages::login_form).post(pages::login_submit))
        .route("/main", get(pages::main_page))
        .route("/vendas", get(pages::vendas))
        .route("/produtos", get(pages::produtos))
        .route("/estoque", get(pages::estoque))
        .route("/clientes", get(pages::clientes))
        .route("/relatorios", get(pages::relatorios))
        .route("/qualidade", get(pages::qualidade))
        .fallback(pages::not_found)
        .with_state(state);

    // Subsystems mount before the layers so they share the
    // logging/tracing stack
    mount_route_sets(router, route_sets)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
