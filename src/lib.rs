//! Gestor - inventory and sales management web application
//!
//! A login-gated set of server-rendered pages plus a self-contained
//! product resource mounted under `/products`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod web;

pub use config::AppConfig;

use axum::Router;

use infrastructure::services::ProductService;
use web::products::ProductRoutes;
use web::{AppState, RouteSet};

/// Build the application: bootstrap storage, construct the immutable
/// state, and assemble the router with every subsystem mounted.
pub async fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    let repository = infrastructure::storage::bootstrap(&config.storage).await?;
    let product_service = ProductService::new(repository);

    let state = AppState::new(config);
    let route_sets: Vec<Box<dyn RouteSet>> = vec![Box::new(ProductRoutes::new(product_service))];

    Ok(web::create_router(state, &route_sets))
}
