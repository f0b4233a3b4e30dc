// Standard HTML meta tags
// Author: kelexine (https://github.com/kelexine)

use super::meta_lines;
use crate::config::SeoConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaData {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    /// Defaults to the configured author
    #[serde(default)]
    pub author: Option<String>,
    /// Default `index, follow`
    #[serde(default)]
    pub robots: Option<String>,
    /// Default `width=device-width, initial-scale=1`
    #[serde(default)]
    pub viewport: Option<String>,
}

/// `<meta name="..." content="..." />` lines for description, keywords,
/// author, robots and viewport, in that order.
pub fn meta_tags(data: &MetaData, defaults: &SeoConfig) -> String {
    meta_lines(
        "name",
        [
            ("description", data.description.as_deref().unwrap_or_default()),
            ("keywords", data.keywords.as_deref().unwrap_or_default()),
            ("author", data.author.as_deref().unwrap_or(&defaults.default_author)),
            ("robots", data.robots.as_deref().unwrap_or("index, follow")),
            (
                "viewport",
                data.viewport
                    .as_deref()
                    .unwrap_or("width=device-width, initial-scale=1"),
            ),
        ],
    )
}
