//! Core types: the backend contract, delegation and the logger handle

pub mod context;
pub mod delegating;
pub mod error;
pub mod field;
pub mod global;
pub mod logger;
mod promise;
pub mod sink;

pub use context::{from_context, into_context, LogContext};
pub use delegating::{new_delegating_logger, DelegatingSink, Fulfiller};
pub use error::{LoggerError, Result};
pub use field::{format_pairs, FieldValue, KeyValue};
pub use global::{is_logger_set, log, set_logger};
pub use logger::Logger;
pub use sink::{LogSink, RuntimeInfo, SinkRef};
