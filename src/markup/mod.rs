//! Markup generators: JSON-LD article schema, OpenGraph tags, meta tags and
//! XML sitemaps.
//!
//! All functions are pure builders; escaping and the sitemap document go
//! through `quick-xml`. Site-wide defaults (author, publisher, logo) come
//! from [`SeoConfig`](crate::config::SeoConfig).
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod meta;
mod opengraph;
mod schema;
mod sitemap;

pub use meta::{meta_tags, MetaData};
pub use opengraph::{open_graph, OpenGraphData};
pub use schema::{article_schema, article_schema_at, ArticleData};
pub use sitemap::{sitemap, sitemap_at, SitemapUrl};

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

/// Normalize a date to ISO-8601 with offset (`2024-01-01T00:00:00+00:00`).
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD` (both read as
/// UTC). Missing or unparseable input yields `now`.
fn iso8601(input: Option<&str>, now: DateTime<Utc>) -> String {
    let parsed = input.map(str::trim).and_then(|s| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, false))
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|d| d.and_utc().to_rfc3339_opts(SecondsFormat::Secs, false))
            })
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc().to_rfc3339_opts(SecondsFormat::Secs, false))
            })
    });

    parsed.unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// Join `<meta {attr}="{name}" content="{value}" />` lines.
fn meta_lines<'a>(attr: &str, tags: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    tags.into_iter()
        .map(|(name, value)| {
            format!(
                "<meta {}=\"{}\" content=\"{}\" />",
                attr,
                escape(name),
                escape(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
