//! Label normalization and tokenization.

use std::sync::LazyLock;

use regex::Regex;
use scribe_core::constants::MIN_TOKEN_BYTES;

/// Runs of whitespace, periods and commas.
static SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\s.,]+").ok());

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == ','
}

/// Collapse separator runs into single spaces and trim.
pub fn normalize(label: &str) -> String {
    match SEPARATORS.as_ref() {
        Some(re) => re.replace_all(label, " ").trim().to_string(),
        None => tokenize_with(label, is_separator).join(" "),
    }
}

fn tokenize_with(label: &str, sep: fn(char) -> bool) -> Vec<String> {
    label
        .split(sep)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a label into tokens, in order, duplicates kept.
pub fn tokenize(label: &str) -> Vec<String> {
    let normalized = normalize(label);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(' ').map(str::to_string).collect()
}

/// Whether a token is long enough to be worth a dictionary lookup.
pub fn is_lookup_candidate(token: &str) -> bool {
    token.len() >= MIN_TOKEN_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_punctuation() {
        assert_eq!(normalize("  long,  term.\tplan  "), "long term plan");
        assert_eq!(normalize("a..b,,c"), "a b c");
    }

    #[test]
    fn tokenizes_in_order() {
        assert_eq!(tokenize("quick fix, quick."), vec!["quick", "fix", "quick"]);
        assert!(tokenize(" ., ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn lookup_candidates_are_measured_in_bytes() {
        assert!(!is_lookup_candidate("to"));
        assert!(is_lookup_candidate("fix"));
        // Two characters, four bytes.
        assert!(is_lookup_candidate("éé"));
        assert!(is_lookup_candidate("ži"));
        // One character, two bytes.
        assert!(!is_lookup_candidate("é"));
    }
}
