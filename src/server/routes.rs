// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    analyze_handler, article_handler, health_handler, meta_handler, metrics_handler,
    opengraph_handler, sitemap_handler,
};
use super::middleware::{request_id_layers, track_metrics};
use crate::analyzer::ContentAnalyzer;
use crate::config::AppConfig;
use crate::error::Result;
use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<ContentAnalyzer>,
}

pub fn create_router(config: AppConfig, analyzer: ContentAnalyzer) -> Result<Router> {
    let state = AppState {
        config: Arc::new(config),
        analyzer: Arc::new(analyzer),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/markup/article", post(article_handler))
        .route("/v1/markup/opengraph", post(opengraph_handler))
        .route("/v1/markup/meta", post(meta_handler))
        .route("/v1/sitemap", post(sitemap_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
