//! Word segmentation for corpus ingestion and compound lookup.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode letters plus apostrophe variants; words are not split at
    // apostrophes ("couldn't" stays one token).
    static ref WORD_PATTERN: Regex = Regex::new(r"['’\p{L}]+").expect("word pattern is valid");
}

/// Split free text into case-folded word tokens.
///
/// Tokens consist of Unicode letters and apostrophe variants; everything else
/// (digits, punctuation, whitespace) separates tokens.
///
/// # Examples
///
/// ```
/// use xiphos::analysis::parse_words;
///
/// let words = parse_words("Can't stop, won't stop!");
/// assert_eq!(words, vec!["can't", "stop", "won't", "stop"]);
/// ```
pub fn parse_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_basic() {
        let words = parse_words("The quick brown fox");
        assert_eq!(words, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_parse_words_case_folding() {
        let words = parse_words("Hello WORLD");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_words_punctuation_and_digits() {
        let words = parse_words("item42, item-43; done.");
        assert_eq!(words, vec!["item", "item", "done"]);
    }

    #[test]
    fn test_parse_words_apostrophes() {
        let words = parse_words("couldn't read, won’t stop");
        assert_eq!(words, vec!["couldn't", "read", "won’t", "stop"]);
    }

    #[test]
    fn test_parse_words_unicode_letters() {
        let words = parse_words("Füße straße naïve");
        assert_eq!(words, vec!["füße", "straße", "naïve"]);
    }

    #[test]
    fn test_parse_words_empty() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("123 456 !?").is_empty());
    }
}
