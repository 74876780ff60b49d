use std::collections::HashSet;

use crate::consts::split_words;

const STOPWORDS: &[&str] = &["is", "the", "a", "an", "and", "or", "to", "of"];

/// Pick keywords out of whitespace-separated text.
///
/// Each token is tried, in order, as:
/// - a title-case word (`Rust`, `Paris,`, `I`),
/// - the start of a `very <word>` phrase, which consumes the next token,
/// - a non-stopword longer than three characters.
///
/// Duplicates are dropped; the first occurrence keeps its position.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let words: Vec<&str> = split_words(text).collect();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    let mut i = 0;
    while i < words.len() {
        let word = words[i];

        let candidate = if is_title(word) {
            Some(word.to_string())
        } else if word.to_lowercase() == "very" && i + 1 < words.len() {
            i += 1;
            Some(format!("{} {}", word, words[i]))
        } else if is_meaningful(word) {
            Some(word.to_string())
        } else {
            None
        };

        if let Some(keyword) = candidate
            && seen.insert(keyword.clone())
        {
            keywords.push(keyword);
        }

        i += 1;
    }

    keywords
}

/// Title case: at least one cased character, uppercase or titlecase only
/// after uncased characters, lowercase only after cased ones.
fn is_title(word: &str) -> bool {
    let mut any_cased = false;
    let mut prev_cased = false;

    for c in word.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else {
            prev_cased = false;
        }
    }

    any_cased
}

/// Letters like `ǅ` are neither upper nor lower but still change case.
fn is_titlecase(c: char) -> bool {
    !c.is_uppercase() && !c.is_lowercase() && c.to_lowercase().ne(std::iter::once(c))
}

fn is_meaningful(word: &str) -> bool {
    let lowered = word.to_lowercase();
    !STOPWORDS.contains(&lowered.as_str()) && word.chars().count() > 3
}
