//! Project-wide constants.

/// Default chat model for real mode.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default base URL of the OpenAI-compatible API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Completion tokens reported for every mock response.
pub const MOCK_COMPLETION_TOKENS: u64 = 20;

/// Longest provider error body echoed back to callers, in characters.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Split on Unicode whitespace and the ASCII separators U+001C..U+001F.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    split_words(text).count()
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DEFAULT_MODEL.is_empty());
        assert!(DEFAULT_API_BASE.starts_with("https://"));
        assert!(!API_KEY_ENV.is_empty());
    }

    #[test]
    fn word_count_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
    }

    #[test]
    fn word_count_mixed_whitespace() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("  one\ttwo\nthree  "), 3);
    }

    #[test]
    fn word_count_splits_on_information_separators() {
        assert_eq!(word_count("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e"), 5);
        assert_eq!(word_count("\u{1f}"), 0);
    }

    #[test]
    fn split_words_skips_empty_runs() {
        let words: Vec<&str> = split_words(" one \u{85}two\u{3000}\u{1c}three ").collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(0.6 + 2.0 * 0.1), 0.8);
        assert_eq!(round2(0.6 + 3.0 * 0.1), 0.9);
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
