// JSON-LD Article schema
// Author: kelexine (https://github.com/kelexine)

use super::iso8601;
use crate::config::SeoConfig;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

/// Fields of an article. Author, publisher and logo fall back to the
/// configured site defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// `<script type="application/ld+json">` block describing an `Article`.
pub fn article_schema(data: &ArticleData, defaults: &SeoConfig) -> String {
    article_schema_at(data, defaults, Utc::now())
}

/// [`article_schema`] with an explicit "now" for missing dates.
pub fn article_schema_at(data: &ArticleData, defaults: &SeoConfig, now: DateTime<Utc>) -> String {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();

    let mut article = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": text(&data.title),
        "description": text(&data.description),
        "image": text(&data.image),
        "datePublished": iso8601(data.date_published.as_deref(), now),
        "dateModified": iso8601(data.date_modified.as_deref(), now),
        "author": {
            "@type": "Person",
            "name": data.author.as_deref().unwrap_or(&defaults.default_author),
        },
        "publisher": {
            "@type": "Organization",
            "name": data.publisher.as_deref().unwrap_or(&defaults.publisher_name),
            "logo": {
                "@type": "ImageObject",
                "url": data.logo.as_deref().unwrap_or(&defaults.logo_url),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "url": text(&data.url),
        },
    });

    if let (Some(keywords), Value::Object(map)) = (&data.keywords, &mut article) {
        map.insert("keywords".to_string(), Value::String(keywords.clone()));
    }

    // "</" inside a string would close the script element early
    let body = article.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", body)
}
