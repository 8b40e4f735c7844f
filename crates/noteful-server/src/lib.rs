//! noteful-server: HTTP API server for the Noteful notes resource
//!
//! This crate provides:
//! - REST endpoints to list, search, fetch, create, update and delete notes
//! - Request validation with JSON error responses
//! - Static file serving for the front-end
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteful_server::{build_app, AppState, ServerConfig};
//! use noteful_store::{Store, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let store = Store::open(StoreConfig::from_env()).await?;
//! let app = build_app(AppState::new(store, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::logger::log_requests;
use crate::middleware::request_id::{propagate_request_id, request_id_layer};

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use noteful_core;
pub use noteful_store;

/// Build the router with the request logging, request ID and tracing layers.
///
/// CORS is left to the binary, which knows the allowed origins.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
}
