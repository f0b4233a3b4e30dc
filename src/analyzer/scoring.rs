// Rule-based on-page SEO score
// Author: kelexine (https://github.com/kelexine)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MAX_SCORE: u8 = 100;

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h1\b[^>]*>.*?</h1\s*>").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h2\b[^>]*>.*?</h2\s*>").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h3\b[^>]*>.*?</h3\s*>").unwrap());
static IMG_ALT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*\salt\s*=\s*(?:"[^"]+"|'[^']+')[^>]*>"#).unwrap()
});
static ANCHOR_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a\b[^>]*\shref\s*=\s*["'][^>]*>"#).unwrap());
static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta\b[^>]*\sname\s*=\s*["']description["'][^>]*\scontent\s*=\s*["'][^>]*>"#)
        .unwrap()
});

/// A scoring rule that fired, with the points it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSignal {
    pub rule: &'static str,
    pub points: u8,
}

/// Points for content length. Only the highest tier reached counts.
fn length_tier(word_count: u64) -> Option<ScoreSignal> {
    let (rule, points) = match word_count {
        300.. => ("words_300", 20),
        200.. => ("words_200", 15),
        100.. => ("words_100", 10),
        _ => return None,
    };
    Some(ScoreSignal { rule, points })
}

/// Every rule that fires for `content`, in table order.
pub fn score_breakdown(content: &str, word_count: u64) -> Vec<ScoreSignal> {
    let markup_rules: [(&'static str, &Lazy<Regex>, u8); 6] = [
        ("h1", &H1, 10),
        ("h2", &H2, 5),
        ("h3", &H3, 5),
        ("img_alt", &IMG_ALT, 10),
        ("link", &ANCHOR_HREF, 10),
        ("meta_description", &META_DESCRIPTION, 10),
    ];

    length_tier(word_count)
        .into_iter()
        .chain(
            markup_rules
                .into_iter()
                .filter(|(_, pattern, _)| pattern.is_match(content))
                .map(|(rule, _, points)| ScoreSignal { rule, points }),
        )
        .collect()
}

/// Sum of the fired rules, capped at [`MAX_SCORE`].
pub fn seo_score(content: &str, word_count: u64) -> u8 {
    let total: u32 = score_breakdown(content, word_count)
        .iter()
        .map(|signal| u32::from(signal.points))
        .sum();
    total.min(u32::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(content: &str, word_count: u64) -> Vec<&'static str> {
        score_breakdown(content, word_count).iter().map(|s| s.rule).collect()
    }

    #[test]
    fn test_length_tiers() {
        assert_eq!(seo_score("", 99), 0);
        assert_eq!(seo_score("", 100), 10);
        assert_eq!(seo_score("", 250), 15);
        assert_eq!(seo_score("", 300), 20);
        assert_eq!(rules("", 5000), vec!["words_300"]);
    }

    #[test]
    fn test_headings_case_insensitive() {
        assert_eq!(rules("<H1 class=\"t\">Title</H1>", 1), vec!["h1"]);
        assert_eq!(rules("<h2>A</h2><h3>B</h3>", 2), vec!["h2", "h3"]);
        // Unclosed headings do not count
        assert!(rules("<h1>Title", 1).is_empty());
        // <header> is not <h1>..<h3>
        assert!(rules("<header>x</header>", 1).is_empty());
    }

    #[test]
    fn test_image_requires_non_empty_alt() {
        assert_eq!(rules(r#"<img src="a.png" alt="Chart">"#, 0), vec!["img_alt"]);
        assert_eq!(rules("<img alt='Chart' src='a.png' />", 0), vec!["img_alt"]);
        assert!(rules(r#"<img src="a.png" alt="">"#, 0).is_empty());
        assert!(rules(r#"<img src="a.png">"#, 0).is_empty());
        assert!(rules(r#"<img src="a.png" data-alt="Chart">"#, 0).is_empty());
    }

    #[test]
    fn test_anchor_and_meta() {
        assert_eq!(rules(r#"<a class="x" href="/docs">Docs</a>"#, 1), vec!["link"]);
        assert!(rules("<a name=\"top\">Top</a>", 1).is_empty());
        assert!(rules("<abbr href=\"x\">A</abbr>", 1).is_empty());
        assert!(rules(r#"<a data-href="/docs">Docs</a>"#, 1).is_empty());
        assert_eq!(
            rules(r#"<meta name="description" content="About us">"#, 0),
            vec!["meta_description"]
        );
        assert!(rules(r#"<meta name="keywords" content="a, b">"#, 0).is_empty());
        assert!(rules(r#"<meta data-name="description" content="About us">"#, 0).is_empty());
    }

    #[test]
    fn test_all_rules_fire() {
        let content = r#"
            <meta name="description" content="d">
            <h1>A</h1><h2>B</h2><h3>C</h3>
            <img src="i.png" alt="i"><a href="/">home</a>
        "#;
        // 20 + 10 + 5 + 5 + 10 + 10 + 10 = 70
        assert_eq!(seo_score(content, 300), 70);
        assert!(seo_score(content, u64::MAX) <= MAX_SCORE);
    }
}
