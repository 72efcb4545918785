pub mod corpus_matcher;
pub mod keyword_lookup;
pub mod write_store;

pub use corpus_matcher::ICorpusMatcher;
pub use keyword_lookup::IKeywordLookup;
pub use write_store::IWriteStore;
