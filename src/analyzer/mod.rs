//! Heuristic content analysis.
//!
//! Word counting, reading time, keyword density and a rule-based SEO score,
//! plus [`ContentAnalyzer`], which caches results and optionally consults an
//! AI provider.
//!
//! # Submodules
//!
//! - `text`: markup stripping and tokenization.
//! - `density`: keyword density table.
//! - `scoring`: additive SEO score rules.
//! - `content_analyzer`: cached analysis with AI delegation.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod content_analyzer;
pub mod density;
mod models;
pub mod scoring;
pub mod text;

pub use content_analyzer::ContentAnalyzer;
pub use density::keyword_density;
pub use models::{AnalysisRequest, AnalysisResult, KeywordDensity};
pub use scoring::{score_breakdown, seo_score, ScoreSignal};

/// Run the heuristics alone: no cache, no provider.
pub fn analyze_heuristics(content: &str) -> AnalysisResult {
    let word_count = text::word_count(content);
    AnalysisResult {
        word_count,
        reading_time: text::reading_time(word_count),
        keyword_density: keyword_density(content),
        seo_score: seo_score(content, word_count),
        ai: None,
    }
}
