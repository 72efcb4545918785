//! # scribe-observability
//!
//! Tracing subscriber setup and the span macros used by the selection pipeline.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans::names};
