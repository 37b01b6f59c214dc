//! Hook owners and their runtime identity.
//!
//! An owner is the entity a set of hook lists belongs to. Hook lists are
//! shared per owner *type*: every instance of `O` sees the same declarations
//! and registrations, and [`do_action`](crate::HookRegistry::do_action)
//! passes the concrete instance to each callback.

use core::any::TypeId;
use core::fmt;

/// Marker trait for types that can own hook lists.
///
/// The trait carries no state. Implementing it is the compile-time
/// equivalent of "this entity is hook-capable": operations on the
/// [`HookRegistry`](crate::HookRegistry) only accept `HookOwner` types.
///
/// # Example
///
/// ```
/// use shifty_hooks::HookOwner;
///
/// struct Button {
///     clicks: u32,
/// }
///
/// impl HookOwner for Button {}
/// ```
pub trait HookOwner: 'static {
    /// Returns the name used for this owner in diagnostics.
    ///
    /// Defaults to the fully qualified type name.
    fn owner_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Identifier for a hook owner type.
///
/// Wraps a `TypeId` together with the owner's diagnostic name so that hook
/// state can be keyed per type and still be reported readably.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId {
    type_id: TypeId,
    name: &'static str,
}

impl OwnerId {
    /// Creates the `OwnerId` for the given owner type.
    ///
    /// ```
    /// use shifty_hooks::{HookOwner, OwnerId};
    ///
    /// struct Widget;
    /// impl HookOwner for Widget {}
    ///
    /// assert_eq!(OwnerId::of::<Widget>(), OwnerId::of::<Widget>());
    /// ```
    #[must_use]
    pub fn of<O: HookOwner>() -> Self {
        Self {
            type_id: TypeId::of::<O>(),
            name: O::owner_name(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the owner's diagnostic name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnerId").field(&self.name).finish()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
