//! Priority-ordered hook lists for Rust.
//!

pub use shifty_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use shifty_internal::prelude::*;
}
