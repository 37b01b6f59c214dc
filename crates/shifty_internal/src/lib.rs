//! # Shifty Internal Library
//!
//! Re-exports the Shifty crates for convenience.

/// Priority-ordered hook lists.
pub use shifty_hooks;

/// Logging setup.
pub use shifty_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use shifty_core::{LogFormat, LoggingConfig};
    pub use shifty_hooks::global;
    pub use shifty_hooks::prelude::*;
}
