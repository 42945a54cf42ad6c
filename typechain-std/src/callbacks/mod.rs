//! Standard callback implementations.

pub mod logging;

pub use logging::LoggingCallback;
