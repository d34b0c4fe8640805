//! Structured logging
//!
//! One JSON object per line, written synchronously, with deterministic key
//! ordering so log output is diffable across runs.

mod logger;

pub use logger::{Logger, Severity};
