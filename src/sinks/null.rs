//! Sink that discards everything

use crate::core::{KeyValue, LogSink, RuntimeInfo, SinkRef};
use std::error::Error;
use std::sync::Arc;

/// Discards every message and reports every level as disabled.
///
/// Used as the placeholder behind delegating loggers until a real backend
/// is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn init(&self, _info: RuntimeInfo) {}

    fn enabled(&self, _level: usize) -> bool {
        false
    }

    fn info(&self, _level: usize, _msg: &str, _pairs: &[KeyValue]) {}

    fn error(&self, _err: Option<&(dyn Error + 'static)>, _msg: &str, _pairs: &[KeyValue]) {}

    fn with_name(&self, _name: &str) -> SinkRef {
        Arc::new(NullSink)
    }

    fn with_values(&self, _pairs: &[KeyValue]) -> SinkRef {
        Arc::new(NullSink)
    }
}
