// Keyword density table
// Author: kelexine (https://github.com/kelexine)

use super::models::KeywordDensity;
use super::text::{strip_tags, words};
use std::collections::HashMap;

/// Keywords kept in the density table
pub const MAX_KEYWORDS: usize = 10;

/// Words this short or shorter are never keywords
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Share of each keyword among all words of `content`, highest first.
///
/// The denominator counts every word, including the short ones that are not
/// eligible as keywords, so the percentages of the table need not sum to 100.
/// Keywords with equal counts keep the order in which they first appear.
pub fn keyword_density(content: &str) -> KeywordDensity {
    let stripped = strip_tags(content);

    let mut total = 0usize;
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in words(&stripped) {
        total += 1;
        let word = word.to_lowercase();
        if word.chars().count() <= MIN_KEYWORD_CHARS {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_KEYWORDS);

    counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / total as f64 * 100.0))
        .collect()
}
