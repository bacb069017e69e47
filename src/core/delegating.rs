//! Delegating sink: a logger backend that can be handed out before the
//! real backend exists.
//!
//! A [`DelegatingSink`] forwards every logging call to whatever backend is
//! currently installed. Until it is fulfilled, derivations (`with_name`,
//! `with_values`) do not reach the backend; instead they produce further
//! delegating sinks and record the derivation in a promise tree. When the
//! [`Fulfiller`] is invoked, the whole tree is rebound to the real backend
//! in one pass, and every handle already held by calling code keeps
//! working without being re-acquired.
//!
//! Messages logged before fulfillment go to the placeholder backend and
//! are never replayed.
//!
//! # Example
//!
//! ```
//! use delegating_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let (root, fulfiller) = DelegatingSink::new(Arc::new(NullSink));
//! let controller = root.with_name("controller");
//!
//! let recorder = RecordingSink::new();
//! fulfiller.fulfill(Arc::new(recorder.clone()));
//!
//! controller.info(0, "reconciled", &[]);
//! assert_eq!(recorder.entries()[0].names, vec!["controller".to_string()]);
//! ```

use super::error::{LoggerError, Result};
use super::field::KeyValue;
use super::logger::Logger;
use super::promise::Promise;
use super::sink::{LogSink, RuntimeInfo, SinkRef};
use parking_lot::RwLock;
use std::error::Error;
use std::sync::{Arc, Weak};

struct State {
    /// Always callable; a placeholder until fulfilled
    sink: SinkRef,
    /// `Some` exactly while unfulfilled
    promise: Option<Arc<Promise>>,
    info: Option<RuntimeInfo>,
}

pub struct DelegatingSink {
    state: RwLock<State>,
}

impl DelegatingSink {
    /// Create a root delegating sink that uses `placeholder` until fulfilled.
    ///
    /// The returned [`Fulfiller`] is the only way to bind the sink and its
    /// derived children to a real backend.
    #[must_use]
    pub fn new(placeholder: SinkRef) -> (Arc<Self>, Fulfiller) {
        let root = Arc::new_cyclic(|weak| Self {
            state: RwLock::new(State {
                sink: placeholder,
                promise: Some(Promise::root(weak.clone())),
                info: None,
            }),
        });
        let fulfiller = Fulfiller {
            root: Arc::clone(&root),
        };
        (root, fulfiller)
    }

    /// Whether this sink has been bound to its real backend
    pub fn is_fulfilled(&self) -> bool {
        self.state.read().promise.is_none()
    }

    /// Runtime information recorded by the last `init` call
    pub fn runtime_info(&self) -> Option<RuntimeInfo> {
        self.state.read().info
    }

    /// Switch to `sink` and mark this node fulfilled
    pub(crate) fn install(&self, sink: SinkRef) {
        let mut state = self.state.write();
        state.sink = sink;
        state.promise = None;
    }

    fn current(&self) -> SinkRef {
        Arc::clone(&self.state.read().sink)
    }

    /// Derive a child: forwarded when fulfilled, otherwise recorded.
    ///
    /// The read lock is held across registration so fulfillment cannot
    /// switch this node over between the check and the append.
    fn derive<D, R>(&self, direct: D, record: R) -> SinkRef
    where
        D: FnOnce(&SinkRef) -> SinkRef,
        R: FnOnce(&Promise, Weak<DelegatingSink>) -> Arc<Promise>,
    {
        let state = self.state.read();
        if let Some(promise) = &state.promise {
            let child: Arc<DelegatingSink> = Arc::new_cyclic(|weak| DelegatingSink {
                state: RwLock::new(State {
                    sink: Arc::clone(&state.sink),
                    promise: Some(record(promise, weak.clone())),
                    info: None,
                }),
            });
            return child;
        }

        let sink = Arc::clone(&state.sink);
        drop(state);
        direct(&sink)
    }

    fn fulfill(&self, actual: SinkRef) -> Result<()> {
        let promise = self.state.read().promise.clone();
        match promise {
            Some(promise) if promise.claim() => {
                promise.fulfill(&actual);
                Ok(())
            }
            _ => Err(LoggerError::AlreadyFulfilled),
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_promise(&self) -> Option<Arc<Promise>> {
        self.state.read().promise.clone()
    }
}

impl Drop for DelegatingSink {
    fn drop(&mut self) {
        if let Some(promise) = &self.state.get_mut().promise {
            promise.abandon();
        }
    }
}

impl LogSink for DelegatingSink {
    fn init(&self, info: RuntimeInfo) {
        self.state.write().info = Some(info);
    }

    fn enabled(&self, level: usize) -> bool {
        self.current().enabled(level)
    }

    fn info(&self, level: usize, msg: &str, pairs: &[KeyValue]) {
        self.current().info(level, msg, pairs);
    }

    fn error(&self, err: Option<&(dyn Error + 'static)>, msg: &str, pairs: &[KeyValue]) {
        self.current().error(err, msg, pairs);
    }

    fn with_name(&self, name: &str) -> SinkRef {
        self.derive(
            |sink| sink.with_name(name),
            |promise, weak| promise.with_name(weak, name),
        )
    }

    fn with_values(&self, pairs: &[KeyValue]) -> SinkRef {
        self.derive(
            |sink| sink.with_values(pairs),
            |promise, weak| promise.with_values(weak, pairs),
        )
    }
}

/// Capability to bind a root [`DelegatingSink`] to its real backend.
///
/// Handed out only at construction, so code that merely holds a logger
/// cannot rebind it.
#[derive(Clone)]
pub struct Fulfiller {
    root: Arc<DelegatingSink>,
}

impl Fulfiller {
    /// Bind the root and every logger derived from it to `actual`.
    ///
    /// Only the first call has any effect; later calls are ignored.
    pub fn fulfill(&self, actual: SinkRef) {
        let _ = self.root.fulfill(actual);
    }

    /// Like [`Fulfiller::fulfill`], but reports a repeated call
    pub fn try_fulfill(&self, actual: SinkRef) -> Result<()> {
        self.root.fulfill(actual)
    }

    pub fn is_fulfilled(&self) -> bool {
        self.root.is_fulfilled()
    }
}

/// Create a delegating [`Logger`] backed by `placeholder` until fulfilled
#[must_use]
pub fn new_delegating_logger(placeholder: SinkRef) -> (Logger, Fulfiller) {
    let (root, fulfiller) = DelegatingSink::new(placeholder);
    (Logger::new(root), fulfiller)
}
