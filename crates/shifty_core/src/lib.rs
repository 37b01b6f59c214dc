//! Ambient infrastructure for Shifty.
//!
//! - [`logging`] - `tracing` subscriber setup ([`LoggingConfig`], [`LogFormat`])

/// Tracing subscriber setup.
pub mod logging;

pub use logging::{LogFormat, LoggingConfig};
