//! In-memory sink that records everything it receives
//!
//! Every sink derived from a [`RecordingSink`] writes into the same shared
//! store, so tests can hold on to the root recorder and inspect what any
//! derived logger emitted.

use crate::core::{format_pairs, KeyValue, LogSink, RuntimeInfo, SinkRef};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A single recorded message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEntry {
    /// Verbosity for info messages, `None` for errors
    pub level: Option<usize>,
    /// Rendered error value, if one was attached
    pub error: Option<String>,
    /// Name path, one segment per `with_name`
    pub names: Vec<String>,
    /// Sink values followed by call-site pairs
    pub values: Vec<KeyValue>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
}

impl RecordedEntry {
    pub fn is_error(&self) -> bool {
        self.level.is_none()
    }
}

impl fmt::Display for RecordedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.level {
            Some(level) => format!("V({})", level),
            None => "ERROR".to_string(),
        };
        write!(f, "[{}] {} - {}", kind, self.names.join("."), self.message)?;
        if let Some(ref err) = self.error {
            write!(f, " error={}", err)?;
        }
        if !self.values.is_empty() {
            write!(f, " {}", format_pairs(&self.values))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Store {
    entries: Mutex<Vec<RecordedEntry>>,
    info: Mutex<Option<RuntimeInfo>>,
}

#[derive(Debug, Clone)]
pub struct RecordingSink {
    store: Arc<Store>,
    names: Vec<String>,
    values: Vec<KeyValue>,
    max_verbosity: Option<usize>,
}

impl RecordingSink {
    /// A recorder with every verbosity enabled
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RecordingSinkBuilder {
        RecordingSinkBuilder::new()
    }

    /// Everything recorded so far, from this sink and every derived sink
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.store.entries.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.store
            .entries
            .lock()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.store.entries.lock().clear();
    }

    /// Runtime information from the most recent `init`
    pub fn runtime_info(&self) -> Option<RuntimeInfo> {
        *self.store.info.lock()
    }

    fn derived(&self, names: Vec<String>, values: Vec<KeyValue>) -> SinkRef {
        Arc::new(Self {
            store: Arc::clone(&self.store),
            names,
            values,
            max_verbosity: self.max_verbosity,
        })
    }

    fn record(&self, level: Option<usize>, error: Option<String>, msg: &str, pairs: &[KeyValue]) {
        let mut values = self.values.clone();
        values.extend_from_slice(pairs);
        let entry = RecordedEntry {
            level,
            error,
            names: self.names.clone(),
            values,
            message: msg.to_string(),
            timestamp: Utc::now(),
            thread_id: format!("{:?}", std::thread::current().id()),
        };
        self.store.entries.lock().push(entry);
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for RecordingSink {
    fn init(&self, info: RuntimeInfo) {
        *self.store.info.lock() = Some(info);
    }

    fn enabled(&self, level: usize) -> bool {
        self.max_verbosity.map_or(true, |max| level <= max)
    }

    fn info(&self, level: usize, msg: &str, pairs: &[KeyValue]) {
        self.record(Some(level), None, msg, pairs);
    }

    fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, pairs: &[KeyValue]) {
        self.record(None, err.map(|e| e.to_string()), msg, pairs);
    }

    fn with_name(&self, name: &str) -> SinkRef {
        let mut names = self.names.clone();
        names.push(name.to_string());
        self.derived(names, self.values.clone())
    }

    fn with_values(&self, pairs: &[KeyValue]) -> SinkRef {
        let mut values = self.values.clone();
        values.extend_from_slice(pairs);
        self.derived(self.names.clone(), values)
    }
}

/// Builder for [`RecordingSink`]
///
/// # Example
///
/// ```
/// use delegating_logger::sinks::RecordingSink;
/// use delegating_logger::LogSink;
///
/// let recorder = RecordingSink::builder()
///     .max_verbosity(1)
///     .name("test")
///     .build();
/// assert!(recorder.enabled(1));
/// assert!(!recorder.enabled(2));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSinkBuilder {
    names: Vec<String>,
    values: Vec<KeyValue>,
    max_verbosity: Option<usize>,
}

impl RecordingSinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest verbosity reported as enabled
    #[must_use]
    pub fn max_verbosity(mut self, level: usize) -> Self {
        self.max_verbosity = Some(level);
        self
    }

    /// Initial name segment
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Initial key-value pair
    #[must_use]
    pub fn value(mut self, pair: impl Into<KeyValue>) -> Self {
        self.values.push(pair.into());
        self
    }

    pub fn build(self) -> RecordingSink {
        RecordingSink {
            store: Arc::new(Store::default()),
            names: self.names,
            values: self.values,
            max_verbosity: self.max_verbosity,
        }
    }
}
