//! Registry configuration.

use crate::priority::Priority;

/// Order in which [`do_action`](crate::HookRegistry::do_action) visits
/// priority buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchOrder {
    /// Highest numeric priority first (default).
    #[default]
    Descending,
    /// Reverse of the order in which each priority bucket was first created.
    ///
    /// Matches descending order only when buckets were created in ascending
    /// priority order.
    ReverseInsertion,
}

/// Configuration for a [`HookRegistry`](crate::HookRegistry).
///
/// # Example
///
/// ```
/// use shifty_hooks::{DispatchOrder, HookRegistry, Priority, RegistryConfig};
///
/// let registry = HookRegistry::with_config(
///     RegistryConfig::default()
///         .with_default_priority(Priority::new(50))
///         .with_dispatch_order(DispatchOrder::ReverseInsertion)
///         .with_invocation_logging(false),
/// );
/// assert_eq!(registry.config().default_priority, Priority::new(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Priority used by `add`/`remove` when none is given.
    pub default_priority: Priority,
    /// Bucket traversal rule used by `do_action`.
    pub dispatch_order: DispatchOrder,
    /// Whether each callback invocation emits an info event.
    pub log_invocations: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::DEFAULT,
            dispatch_order: DispatchOrder::Descending,
            log_invocations: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority used when none is given.
    #[must_use]
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Sets the bucket traversal rule.
    #[must_use]
    pub fn with_dispatch_order(mut self, order: DispatchOrder) -> Self {
        self.dispatch_order = order;
        self
    }

    /// Enables or disables the per-invocation info event.
    #[must_use]
    pub fn with_invocation_logging(mut self, enabled: bool) -> Self {
        self.log_invocations = enabled;
        self
    }
}
