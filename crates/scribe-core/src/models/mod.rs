pub mod decision;
pub mod dictionary_entry;
pub mod option;
pub mod used_set;
pub mod wildcard_set;

pub use decision::{Decision, Resolution};
pub use dictionary_entry::DictionaryEntry;
pub use option::{OptionCatalogue, WritingOption};
pub use used_set::UsedSet;
pub use wildcard_set::WildcardSet;
