// Single source of truth for all default values.

// --- Selection ---
pub const DEFAULT_MAX_KEYWORDS_BYTES: usize = 65_536;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "scribe.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
