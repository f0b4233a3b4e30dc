// Markup stripping and word tokenization
// Author: kelexine (https://github.com/kelexine)

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Opening, closing, comment and declaration tags. A bare `<` followed by a
/// space or digit is left alone so "a < b" survives as text.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[!/?a-zA-Z][^>]*>").unwrap());

/// Replace every markup tag with a single space.
///
/// Tags become separators rather than disappearing, so adjacent block
/// elements (`<h1>Title</h1><p>Body`) do not glue their words together.
pub fn strip_tags(content: &str) -> Cow<'_, str> {
    TAG.replace_all(content, " ")
}

/// Whitespace-delimited words with surrounding punctuation trimmed.
///
/// Tokens without any alphanumeric character (stray punctuation, dashes,
/// bullets) are not words and are skipped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
}

/// Number of words in `content` once markup is removed.
pub fn word_count(content: &str) -> u64 {
    words(&strip_tags(content)).count() as u64
}

/// Minutes to read `word_count` words at 200 words per minute, rounded up.
pub fn reading_time(word_count: u64) -> u64 {
    word_count.div_ceil(200)
}
