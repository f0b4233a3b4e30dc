//! Analysis request and result models.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::ai::{AiOutcome, ProviderOptions};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Input to a single analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    /// Raw text or HTML.
    pub content: String,
    /// AI provider to consult in addition to the heuristics.
    #[serde(default)]
    pub provider: Option<String>,
    /// Per-call overrides for the provider.
    #[serde(default)]
    pub options: ProviderOptions,
}

/// Keyword → percentage, ordered from the densest keyword down.
///
/// Serializes as a JSON object whose keys appear in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordDensity(Vec<(String, f64)>);

impl KeywordDensity {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, keyword: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, pct)| *pct)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, pct)| (k.as_str(), *pct))
    }
}

impl FromIterator<(String, f64)> for KeywordDensity {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for KeywordDensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (keyword, pct) in &self.0 {
            map.serialize_entry(keyword, pct)?;
        }
        map.end()
    }
}

/// Outcome of analysing one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub word_count: u64,
    /// Minutes, rounded up.
    pub reading_time: u64,
    pub keyword_density: KeywordDensity,
    /// 0..=100
    pub seo_score: u8,
    /// Provider response or error descriptor; absent when no provider was asked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiOutcome>,
}

impl AnalysisResult {
    /// Result for content with no words and no markup signals
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            reading_time: 0,
            keyword_density: KeywordDensity::default(),
            seo_score: 0,
            ai: None,
        }
    }
}
