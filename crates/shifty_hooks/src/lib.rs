//! Priority-ordered hook lists for Shifty.
//!
//! `shifty_hooks` lets independent pieces of code attach named callbacks to
//! hook lists owned by a type, at a chosen priority, and later invoke every
//! attached callback in priority order.
//!
//! # Core Concepts
//!
//! - [`HookOwner`] - Marker for types that own hook lists
//! - [`HookRegistry`] - Declares lists, attaches/detaches callbacks, dispatches
//! - [`HookState`], [`HookList`], [`PriorityBucket`] - The stored structure
//! - [`Priority`] - Higher runs first, default `10`
//! - [`HookError`] - Every violated precondition of a rejected operation
//!
//! # Failure policy
//!
//! Nothing in this crate panics on bad input. The plain operations
//! (`create`, `add`, `remove`) log one `warn` event per rejected call; the
//! `try_` variants return a [`HookError`] instead.
//!
//! # Example
//!
//! ```
//! use shifty_hooks::{HookOwner, HookRegistry};
//!
//! struct Player {
//!     health: u32,
//! }
//! impl HookOwner for Player {}
//!
//! let hooks = HookRegistry::new();
//! hooks.create::<Player>("respawn");
//! hooks.add::<Player>("respawn", "heal", |player| player.health = 100);
//!
//! let mut player = Player { health: 0 };
//! hooks.do_action(&mut player, "respawn");
//! assert_eq!(player.health, 100);
//! ```

/// Registry configuration.
pub mod config;

/// Error types for registry operations.
pub mod error;

/// Process-wide registry and free functions.
pub mod global;

/// Owner marker trait and identity.
pub mod owner;

/// Hook priorities.
pub mod priority;

/// The hook registry.
pub mod registry;

/// Hook state containers.
pub mod state;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::config::{DispatchOrder, RegistryConfig};
    pub use crate::error::{HookError, Operation, Registration, Violation};
    pub use crate::owner::{HookOwner, OwnerId};
    pub use crate::priority::Priority;
    pub use crate::registry::{HookRegistry, HookView};
    pub use crate::state::{HookFn, HookList, HookState, PriorityBucket};
}

pub use config::{DispatchOrder, RegistryConfig};
pub use error::{HookError, Operation, Registration, Violation};
pub use owner::{HookOwner, OwnerId};
pub use priority::Priority;
pub use registry::{HookRegistry, HookView};
pub use state::{HookFn, HookList, HookState, PriorityBucket};
