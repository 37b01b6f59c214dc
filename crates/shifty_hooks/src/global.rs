//! Process-wide registry.
//!
//! Free functions operating on a single lazily initialised
//! [`HookRegistry`] with default configuration. Use them when hook lists
//! are declared at type-registration time and read from anywhere; build a
//! dedicated [`HookRegistry`] when isolation is needed.
//!
//! ```
//! use shifty_hooks::{global, HookOwner};
//!
//! struct Session {
//!     opened: bool,
//! }
//! impl HookOwner for Session {}
//!
//! global::create::<Session>("open");
//! global::add::<Session>("open", "mark", |session| session.opened = true);
//!
//! let mut session = Session { opened: false };
//! global::do_action(&mut session, "open");
//! assert!(session.opened);
//! ```

use std::sync::LazyLock;

use crate::owner::HookOwner;
use crate::priority::Priority;
use crate::registry::{HookRegistry, HookView};

static REGISTRY: LazyLock<HookRegistry> = LazyLock::new(HookRegistry::new);

/// Returns the process-wide registry.
#[must_use]
pub fn registry() -> &'static HookRegistry {
    &REGISTRY
}

/// See [`HookRegistry::create`].
pub fn create<O: HookOwner>(list: &str) {
    registry().create::<O>(list);
}

/// See [`HookRegistry::add`].
pub fn add<O: HookOwner>(
    list: &str,
    hook_id: impl Into<String>,
    hook: impl Fn(&mut O) + Send + Sync + 'static,
) {
    registry().add::<O>(list, hook_id, hook);
}

/// See [`HookRegistry::add_with_priority`].
pub fn add_with_priority<O: HookOwner>(
    list: &str,
    hook_id: impl Into<String>,
    hook: impl Fn(&mut O) + Send + Sync + 'static,
    priority: impl Into<Priority>,
) {
    registry().add_with_priority::<O>(list, hook_id, hook, priority);
}

/// See [`HookRegistry::remove`].
pub fn remove<O: HookOwner>(list: &str, hook_id: &str) {
    registry().remove::<O>(list, hook_id);
}

/// See [`HookRegistry::remove_with_priority`].
pub fn remove_with_priority<O: HookOwner>(list: &str, hook_id: &str, priority: impl Into<Priority>) {
    registry().remove_with_priority::<O>(list, hook_id, priority);
}

/// See [`HookRegistry::get`].
#[must_use]
pub fn get<O: HookOwner>(list: Option<&str>) -> Option<HookView<O>> {
    registry().get::<O>(list)
}

/// See [`HookRegistry::do_action`].
pub fn do_action<O: HookOwner>(owner: &mut O, list: &str) {
    registry().do_action(owner, list);
}
