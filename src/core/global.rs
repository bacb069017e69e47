//! Process-wide root logger
//!
//! [`log`] hands out the root logger at any time, including long before a
//! backend is chosen. Until [`set_logger`] is called, the root delegates to
//! a [`NullSink`], so everything logged is discarded; names and values
//! derived from it are kept and applied once the backend is installed.

use super::delegating::{new_delegating_logger, Fulfiller};
use super::logger::Logger;
use crate::sinks::NullSink;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct Root {
    logger: Logger,
    fulfiller: Fulfiller,
}

static ROOT: Lazy<Root> = Lazy::new(|| {
    let (logger, fulfiller) = new_delegating_logger(Arc::new(NullSink));
    Root { logger, fulfiller }
});

static LOGGER_SET: AtomicBool = AtomicBool::new(false);

/// The process-wide root logger
pub fn log() -> Logger {
    ROOT.logger.clone()
}

/// Install the backend behind the root logger.
///
/// Every logger already derived from [`log`] switches over as well. Only
/// the first call takes effect.
pub fn set_logger(logger: Logger) {
    LOGGER_SET.store(true, Ordering::Release);
    if ROOT.fulfiller.try_fulfill(Arc::clone(logger.sink())).is_err() {
        eprintln!("[LOGGER WARNING] set_logger called more than once; keeping the first logger");
    }
}

/// Whether [`set_logger`] has been called
pub fn is_logger_set() -> bool {
    LOGGER_SET.load(Ordering::Acquire)
}
