/// Scribe version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokens shorter than this many UTF-8 bytes are never looked up.
pub const MIN_TOKEN_BYTES: usize = 3;

/// Marker placed before a synonym in a LIKE pattern.
pub const PATTERN_PREFIX: &str = "% ";

/// Marker placed after a synonym in a LIKE pattern.
pub const PATTERN_SUFFIX: &str = " %";

/// Number of generation passes emitted in legacy pattern mode.
pub const LEGACY_PATTERN_PASSES: usize = 4;

/// Field name under which committed content is written.
pub const CONTENT_FIELD: &str = "content";
