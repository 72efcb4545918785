use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{OptionCatalogue, UsedSet, WildcardSet};

/// Which phase of the selection produced the chosen option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The label occurred literally in the keywords text.
    Name,
    /// The label's wildcard expansion matched the most corpus records.
    Corpus,
    /// No evidence either way; picked uniformly at random.
    #[default]
    Random,
}

/// Result of a selection call. The caller persists `wildcards` and `used`
/// and passes them back on the next call of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Keywords text exactly as submitted.
    pub keywords: String,
    /// Id of the chosen option.
    pub option: String,
    /// The catalogue, echoed back in its original order.
    pub options: OptionCatalogue,
    /// Winning score: a substring count or a corpus count, 0 on random fallback.
    pub max: u64,
    /// Corpus count per option label. Empty unless corpus scoring ran.
    pub summary: BTreeMap<String, u64>,
    /// Wildcard set to carry into the next call.
    pub wildcards: WildcardSet,
    /// Used labels including the one just selected.
    pub used: UsedSet,
    #[serde(default)]
    pub resolved_by: Resolution,
}

impl Decision {
    /// Label of the chosen option.
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get_by_id(&self.option).map(|o| o.label.as_str())
    }
}
