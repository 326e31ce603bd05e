//! HTTP API handlers for svx-sg

pub mod handlers;
pub mod health;

pub use handlers::synthesize;
pub use health::health_routes;
