//! Concurrent provider fan-out and result aggregation.

pub mod aggregator;

pub use aggregator::{EngineError, SearchEngine, DEFAULT_PROVIDER_TIMEOUT};
