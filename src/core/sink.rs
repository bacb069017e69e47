//! Backend sink trait: the capability every logging backend provides

use super::field::KeyValue;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

/// Shared handle to a backend sink
pub type SinkRef = Arc<dyn LogSink>;

/// Information about the caller handed to a sink when a logger is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// Number of stack frames between the user's call site and the sink
    pub call_depth: usize,
}

/// A logging backend.
///
/// Sinks are shared between threads and never mutated by derivation:
/// `with_name` and `with_values` return a new sink carrying the extra
/// name segment or pairs. How names are joined and how pairs are rendered
/// is entirely up to the implementation.
pub trait LogSink: Send + Sync {
    /// Receive runtime information about the logger being created
    fn init(&self, info: RuntimeInfo);

    /// Whether messages at the given verbosity would be emitted
    fn enabled(&self, level: usize) -> bool;

    /// Emit a non-error message at the given verbosity
    fn info(&self, level: usize, msg: &str, pairs: &[KeyValue]);

    /// Emit an error message, optionally with the error that caused it
    fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, pairs: &[KeyValue]);

    /// Derive a sink with `name` appended to the name path
    fn with_name(&self, name: &str) -> SinkRef;

    /// Derive a sink with `pairs` appended to its key-value context
    fn with_values(&self, pairs: &[KeyValue]) -> SinkRef;
}
