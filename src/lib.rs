//! # Delegating Logger
//!
//! Logger handles that can be named, tagged and passed around before the
//! logging backend that will actually write them has been chosen.
//!
//! ## Features
//!
//! - **Deferred binding**: derive loggers with `with_name`/`with_values`
//!   immediately; the derivations are recorded and replayed once a backend
//!   is installed
//! - **Stable handles**: fulfillment rebinds every logger already handed out,
//!   nothing has to be re-acquired
//! - **Thread Safe**: logging, derivation and fulfillment may race freely,
//!   with no lock spanning the whole logger tree
//! - **Pluggable backends**: anything implementing [`LogSink`]
//!
//! ## Example
//!
//! ```
//! use delegating_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let (root, fulfiller) = new_delegating_logger(Arc::new(NullSink));
//! let reconciler = root.with_name("reconciler").with_values(&kvs!["kind" => "Pod"]);
//! reconciler.info("dropped: no backend yet");
//!
//! let recorder = RecordingSink::new();
//! fulfiller.fulfill(Arc::new(recorder.clone()));
//!
//! reconciler.info("delivered");
//! assert_eq!(recorder.messages(), vec!["delivered".to_string()]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        from_context, into_context, is_logger_set, log, new_delegating_logger, set_logger,
        DelegatingSink, FieldValue, Fulfiller, KeyValue, LogContext, LogSink, Logger, LoggerError,
        Result, RuntimeInfo, SinkRef,
    };
    pub use crate::kvs;
    pub use crate::sinks::{NullSink, RecordedEntry, RecordingSink};
}

pub use crate::core::{
    format_pairs, from_context, into_context, is_logger_set, log, new_delegating_logger,
    set_logger, DelegatingSink, FieldValue, Fulfiller, KeyValue, LogContext, LogSink, Logger,
    LoggerError, Result, RuntimeInfo, SinkRef,
};
pub use sinks::{NullSink, RecordingSink};
