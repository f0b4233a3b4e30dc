// XML sitemap (sitemaps.org protocol 0.9)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, SeoError};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use std::io;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitemapUrl {
    pub loc: String,
    /// Default: now
    #[serde(default)]
    pub lastmod: Option<String>,
    /// Default: `weekly`
    #[serde(default)]
    pub changefreq: Option<String>,
    /// Default: `0.8`
    #[serde(default)]
    pub priority: Option<String>,
}

pub fn sitemap(urls: &[SitemapUrl]) -> Result<String> {
    sitemap_at(urls, Utc::now())
}

/// [`sitemap`] with an explicit "now" for entries without `lastmod`.
///
/// `lastmod` values are written as given.
pub fn sitemap_at(urls: &[SitemapUrl], now: DateTime<Utc>) -> Result<String> {
    let now = now.to_rfc3339_opts(SecondsFormat::Secs, false);

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &url.loc)?;
        text_element(&mut writer, "lastmod", url.lastmod.as_deref().unwrap_or(&now))?;
        text_element(
            &mut writer,
            "changefreq",
            url.changefreq.as_deref().unwrap_or("weekly"),
        )?;
        text_element(&mut writer, "priority", url.priority.as_deref().unwrap_or("0.8"))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| SeoError::Internal(format!("Sitemap is not UTF-8: {}", e)))
}

/// `<name>text</name>`, with `text` escaped
fn text_element<W: io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
