//! Request-scoped logger propagation
//!
//! A [`LogContext`] is passed explicitly down a call chain and carries the
//! logger that code along the chain should use. Attaching a logger returns
//! a new context; the original is left untouched.

use super::error::{LoggerError, Result};
use super::field::KeyValue;
use super::global;
use super::logger::Logger;

#[derive(Debug, Clone, Default)]
pub struct LogContext {
    logger: Option<Logger>,
}

impl LogContext {
    /// A context with no logger attached
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached logger
    pub fn logger(&self) -> Result<Logger> {
        self.logger.clone().ok_or(LoggerError::LoggerNotFound)
    }

    /// The attached logger, or one that discards everything
    pub fn logger_or_discard(&self) -> Logger {
        self.logger.clone().unwrap_or_else(Logger::discard)
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}

/// Return a copy of `ctx` carrying `logger`
pub fn into_context(ctx: &LogContext, logger: Logger) -> LogContext {
    let mut ctx = ctx.clone();
    ctx.logger = Some(logger);
    ctx
}

/// The logger attached to `ctx`, or the process-wide root logger.
///
/// Any `pairs` are appended to the returned logger.
pub fn from_context(ctx: &LogContext, pairs: &[KeyValue]) -> Logger {
    let logger = ctx.logger.clone().unwrap_or_else(global::log);
    if pairs.is_empty() {
        logger
    } else {
        logger.with_values(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kvs;
    use crate::sinks::RecordingSink;
    use std::sync::Arc;

    #[test]
    fn test_empty_context_has_no_logger() {
        let ctx = LogContext::new();
        assert!(!ctx.has_logger());
        assert!(matches!(ctx.logger(), Err(LoggerError::LoggerNotFound)));
        assert!(!ctx.logger_or_discard().enabled());
    }

    #[test]
    fn test_from_empty_context_returns_root() {
        // Still usable even though no backend has been installed
        let logger = from_context(&LogContext::new(), &[]);
        logger.info("dropped or delivered, never a panic");
    }

    #[test]
    fn test_returns_attached_logger() {
        let recorder = RecordingSink::new();
        let want = Logger::new(Arc::new(recorder.clone())).with_name("my-logger");
        let ctx = into_context(&LogContext::new(), want);

        from_context(&ctx, &[]).info("test message");

        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].names, vec!["my-logger".to_string()]);
        assert!(entries[0].values.is_empty());
    }

    #[test]
    fn test_appends_pairs_on_retrieval() {
        let recorder = RecordingSink::new();
        let want = Logger::new(Arc::new(recorder.clone())).with_name("my-logger");
        let ctx = into_context(&LogContext::new(), want);

        from_context(&ctx, &kvs!["tag1" => "value1"]).info("test message");

        let entries = recorder.entries();
        assert_eq!(entries[0].names, vec!["my-logger".to_string()]);
        assert_eq!(entries[0].values, kvs!["tag1" => "value1"]);
    }

    #[test]
    fn test_into_context_leaves_original_untouched() {
        let base = LogContext::new();
        let derived = into_context(&base, Logger::discard());
        assert!(!base.has_logger());
        assert!(derived.has_logger());
    }
}
