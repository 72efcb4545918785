//! Pattern variants generated for one synonym.

use scribe_core::config::PatternMode;
use scribe_core::constants::{LEGACY_PATTERN_PASSES, PATTERN_PREFIX, PATTERN_SUFFIX};

/// Wrap text with the leading and trailing delimiter markers.
pub fn wrap(text: &str) -> String {
    format!("{PATTERN_PREFIX}{text}{PATTERN_SUFFIX}")
}

/// Upper-case the first letter of every word, lower-case the rest.
/// An apostrophe does not start a new word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = c != '\'';
        }
    }
    out
}

/// The five forms: as-is, before a period, before a comma, lower case, title case.
fn one_pass(synonym: &str, closed_comma: bool) -> [String; 5] {
    let comma = if closed_comma {
        wrap(&format!("{synonym},"))
    } else {
        format!("{PATTERN_PREFIX}{synonym}, ")
    };
    [
        wrap(synonym),
        wrap(&format!("{synonym}.")),
        comma,
        wrap(&synonym.to_lowercase()),
        wrap(&title_case(synonym)),
    ]
}

/// All patterns for one synonym under the given mode.
pub fn synonym_patterns(synonym: &str, mode: PatternMode) -> Vec<String> {
    match mode {
        PatternMode::Collapsed => one_pass(synonym, true).into(),
        PatternMode::Legacy => (0..LEGACY_PATTERN_PASSES)
            .flat_map(|pass| one_pass(synonym, pass + 1 < LEGACY_PATTERN_PASSES))
            .collect(),
    }
}
