//! Logger handle: the front end user code holds and derives from

use super::field::KeyValue;
use super::sink::{RuntimeInfo, SinkRef};
use crate::sinks::NullSink;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A cheap, cloneable logger handle over a [`LogSink`](super::LogSink).
///
/// Verbosity works like numbered info levels: `v(0)` is always the most
/// important, higher numbers are chattier. Error messages ignore verbosity.
///
/// # Example
///
/// ```
/// use delegating_logger::prelude::*;
///
/// let recorder = RecordingSink::new();
/// let logger = Logger::new(std::sync::Arc::new(recorder.clone()))
///     .with_name("reconciler")
///     .with_values(&kvs!["namespace" => "default"]);
///
/// logger.info("starting");
/// assert_eq!(recorder.len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: SinkRef,
    level: usize,
}

impl Logger {
    /// Wrap `sink`, letting it know a logger was created over it
    #[must_use]
    pub fn new(sink: SinkRef) -> Self {
        sink.init(RuntimeInfo { call_depth: 1 });
        Self { sink, level: 0 }
    }

    /// A logger that drops everything
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Arc::new(NullSink))
    }

    pub fn sink(&self) -> &SinkRef {
        &self.sink
    }

    pub fn verbosity(&self) -> usize {
        self.level
    }

    /// A handle whose info messages are `level` steps more verbose
    #[must_use]
    pub fn v(&self, level: usize) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            level: self.level.saturating_add(level),
        }
    }

    pub fn enabled(&self) -> bool {
        self.sink.enabled(self.level)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.info_with(msg, &[]);
    }

    pub fn info_with(&self, msg: impl AsRef<str>, pairs: &[KeyValue]) {
        if self.enabled() {
            self.sink.info(self.level, msg.as_ref(), pairs);
        }
    }

    pub fn error(&self, err: &(dyn Error + 'static), msg: impl AsRef<str>) {
        self.error_with(err, msg, &[]);
    }

    pub fn error_with(&self, err: &(dyn Error + 'static), msg: impl AsRef<str>, pairs: &[KeyValue]) {
        self.sink.error(Some(err), msg.as_ref(), pairs);
    }

    /// Log an error message that has no underlying error value
    pub fn error_message(&self, msg: impl AsRef<str>, pairs: &[KeyValue]) {
        self.sink.error(None, msg.as_ref(), pairs);
    }

    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            sink: self.sink.with_name(name),
            level: self.level,
        }
    }

    #[must_use]
    pub fn with_values(&self, pairs: &[KeyValue]) -> Self {
        Self {
            sink: self.sink.with_values(pairs),
            level: self.level,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish_non_exhaustive()
    }
}
