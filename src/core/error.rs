//! Error types for the delegating logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No logger was attached to the context
    #[error("no logger attached to context")]
    LoggerNotFound,

    /// The delegating logger was already bound to a backend
    #[error("delegating logger already fulfilled")]
    AlreadyFulfilled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::LoggerNotFound.to_string(),
            "no logger attached to context"
        );
        assert_eq!(
            LoggerError::AlreadyFulfilled.to_string(),
            "delegating logger already fulfilled"
        );
    }
}
