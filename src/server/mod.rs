//! Axum-based HTTP server exposing the analyzer and markup generators.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints (analysis, markup, health, metrics).
//! - `middleware`: Request ID tracking and per-route request metrics.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{MarkupResponse, SitemapRequest};
pub use routes::{create_router, AppState};
