pub mod corpus_ops;
pub mod keyword_ops;
pub mod write_ops;
