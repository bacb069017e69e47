//! Logging macros for ergonomic message formatting and key-value lists.
//!
//! # Examples
//!
//! ```
//! use delegating_logger::prelude::*;
//! use delegating_logger::{error, info};
//!
//! let logger = Logger::discard();
//!
//! info!(logger, "Server started");
//! info!(logger, "Listening on port {}", 8080);
//!
//! let err = std::fmt::Error;
//! error!(logger, &err, "Request {} failed", 42);
//!
//! let child = logger.with_values(&kvs!["user_id" => 42, "action" => "login"]);
//! ```

/// Build a `Vec<KeyValue>` from `key => value` pairs, preserving order.
///
/// ```
/// use delegating_logger::{kvs, KeyValue};
///
/// let pairs = kvs!["a" => 1, "b" => "two"];
/// assert_eq!(pairs, vec![KeyValue::new("a", 1), KeyValue::new("b", "two")]);
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        ::std::vec::Vec::<$crate::KeyValue>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::KeyValue::new($key, $value)),+]
    };
}

/// Log a formatted info message at an extra verbosity level.
///
/// ```
/// # use delegating_logger::prelude::*;
/// # let logger = Logger::discard();
/// use delegating_logger::log;
/// log!(logger, 2, "Cache miss for key {}", "abc");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.v($level).info(format!($($arg)+))
    };
}

/// Log a formatted info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a formatted error message with the error that caused it.
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.error($err, format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Logger;
    use crate::sinks::RecordingSink;
    use crate::KeyValue;
    use std::sync::Arc;

    fn recording() -> (Logger, RecordingSink) {
        let recorder = RecordingSink::builder().max_verbosity(1).build();
        (Logger::new(Arc::new(recorder.clone())), recorder)
    }

    #[test]
    fn test_kvs_macro() {
        let empty = kvs![];
        assert!(empty.is_empty());

        let pairs = kvs!["a" => 1, "b" => true,];
        assert_eq!(pairs, vec![KeyValue::new("a", 1), KeyValue::new("b", true)]);
    }

    #[test]
    fn test_info_macro() {
        let (logger, recorder) = recording();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
        assert_eq!(
            recorder.messages(),
            vec!["Info message".to_string(), "Items: 100".to_string()]
        );
    }

    #[test]
    fn test_log_macro_respects_verbosity() {
        let (logger, recorder) = recording();
        log!(logger, 1, "shown {}", 1);
        log!(logger, 2, "hidden {}", 2);
        assert_eq!(recorder.messages(), vec!["shown 1".to_string()]);
    }

    #[test]
    fn test_error_macro() {
        let (logger, recorder) = recording();
        let err = std::fmt::Error;
        error!(logger, &err, "Code: {}", 500);

        let entries = recorder.entries();
        assert_eq!(entries[0].message, "Code: 500");
        assert!(entries[0].is_error());
    }
}
