use serde::{Deserialize, Serialize};

/// How many pattern variants the expander emits per synonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// One pass of the five variant forms.
    #[default]
    Collapsed,
    /// Four passes, byte-for-byte with the legacy pattern list
    /// (including the unterminated comma form of the last pass).
    Legacy,
}

impl PatternMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Legacy => "legacy",
        }
    }
}

/// Wildcard expansion configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WildcardConfig {
    pub pattern_mode: PatternMode,
}
