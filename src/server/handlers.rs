// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::analyzer::{AnalysisRequest, AnalysisResult};
use crate::cache::CacheStats;
use crate::error::{Result, SeoError};
use crate::markup::{self, ArticleData, MetaData, OpenGraphData, SitemapUrl};
use crate::metrics::gather_metrics;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cache: CacheStats,
    pub timestamp: String,
}

/// Body of the markup endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MarkupResponse {
    pub markup: String,
}

#[derive(Debug, Deserialize)]
pub struct SitemapRequest {
    pub urls: Vec<SitemapUrl>,
}

/// Deserialize a raw body; failures become 400 responses
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let parsed: T = serde_json::from_str(body).inspect_err(|e| {
        debug!("Rejected request body: {}", e);
    })?;
    Ok(parsed)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cache: state.analyzer.cache_stats(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        gather_metrics(),
    )
}

/// Handler for /v1/analyze
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AnalysisResult>> {
    let request: AnalysisRequest = parse_body(&body)?;

    info!(
        "Received analysis request: {} bytes, provider={}",
        request.content.len(),
        request.provider.as_deref().unwrap_or("none")
    );

    let result = state.analyzer.analyze_request(&request).await;
    Ok(Json(result))
}

pub async fn article_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<MarkupResponse>> {
    let data: ArticleData = parse_body(&body)?;
    Ok(Json(MarkupResponse {
        markup: markup::article_schema(&data, &state.config.seo),
    }))
}

pub async fn opengraph_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<MarkupResponse>> {
    let data: OpenGraphData = parse_body(&body)?;
    Ok(Json(MarkupResponse {
        markup: markup::open_graph(&data, &state.config.seo),
    }))
}

pub async fn meta_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<MarkupResponse>> {
    let data: MetaData = parse_body(&body)?;
    Ok(Json(MarkupResponse {
        markup: markup::meta_tags(&data, &state.config.seo),
    }))
}

pub async fn sitemap_handler(body: String) -> Result<impl IntoResponse> {
    let request: SitemapRequest = parse_body(&body)?;
    if let Some(i) = request.urls.iter().position(|u| u.loc.trim().is_empty()) {
        return Err(SeoError::InvalidRequest(format!("urls[{}].loc must not be empty", i)));
    }

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        markup::sitemap(&request.urls)?,
    ))
}
