//! Backend sink implementations

pub mod null;
pub mod recording;

pub use null::NullSink;
pub use recording::{RecordedEntry, RecordingSink, RecordingSinkBuilder};

// Re-export the trait for convenience
pub use crate::core::LogSink;
