//! # scribe-selection
//!
//! Picks the option that best matches a keywords text:
//! name scoring → corpus scoring → random fallback → used-set bookkeeping.

pub mod engine;
pub mod fallback;
pub mod protocol;
pub mod scoring;
pub mod service;

pub use engine::SelectionEngine;
pub use protocol::{CommitAck, CommitRequest, LookupRequest, Operation, SelectRequest};
pub use service::ContentService;
