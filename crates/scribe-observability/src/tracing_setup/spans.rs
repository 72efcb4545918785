//! Span definitions per operation: selection, expansion, corpus count, commit.

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($keywords:expr, $option_count:expr) => {
        tracing::info_span!("scribe.selection", keywords = %$keywords, options = $option_count)
    };
}

/// Create a wildcard expansion span.
#[macro_export]
macro_rules! expansion_span {
    ($label:expr) => {
        tracing::debug_span!("scribe.expansion", label = %$label)
    };
}

/// Create a corpus count span.
#[macro_export]
macro_rules! corpus_span {
    ($tokens:expr) => {
        tracing::debug_span!("scribe.corpus", tokens = $tokens)
    };
}

/// Create a commit span.
#[macro_export]
macro_rules! commit_span {
    ($key:expr) => {
        tracing::info_span!("scribe.commit", key = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SELECTION: &str = "scribe.selection";
    pub const EXPANSION: &str = "scribe.expansion";
    pub const CORPUS: &str = "scribe.corpus";
    pub const COMMIT: &str = "scribe.commit";
}
