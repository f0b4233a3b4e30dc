// OpenGraph meta tags
// Author: kelexine (https://github.com/kelexine)

use super::meta_lines;
use crate::config::SeoConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenGraphData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `og:type`, default `article`
    #[serde(default, rename = "type")]
    pub og_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Defaults to the configured publisher name
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Defaults to the title
    #[serde(default)]
    pub image_alt: Option<String>,
}

/// `<meta property="og:..." content="..." />` lines.
///
/// `og:image` and `og:image:alt` are only emitted when an image is given.
pub fn open_graph(data: &OpenGraphData, defaults: &SeoConfig) -> String {
    let mut tags: Vec<(&str, &str)> = vec![
        ("og:title", data.title.as_deref().unwrap_or_default()),
        ("og:description", data.description.as_deref().unwrap_or_default()),
        ("og:type", data.og_type.as_deref().unwrap_or("article")),
        ("og:url", data.url.as_deref().unwrap_or_default()),
        ("og:site_name", data.site_name.as_deref().unwrap_or(&defaults.publisher_name)),
    ];

    if let Some(image) = data.image.as_deref() {
        let alt = data
            .image_alt
            .as_deref()
            .or(data.title.as_deref())
            .unwrap_or_default();
        tags.push(("og:image", image));
        tags.push(("og:image:alt", alt));
    }

    meta_lines("property", tags)
}
