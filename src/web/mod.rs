//! Web layer - axum routes, handlers, and subsystem mounting

pub mod error;
pub mod flash;
pub mod health;
pub mod middleware;
pub mod pages;
pub mod products;
pub mod router;
pub mod state;
pub mod subsystem;

pub use router::create_router;
pub use state::AppState;
pub use subsystem::RouteSet;
