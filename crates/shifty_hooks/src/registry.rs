//! The hook registry.
//!
//! [`HookRegistry`] stores, per owner type, named hook lists of
//! priority-bucketed callbacks, and invokes them on demand.
//!
//! # Structured vs permissive operations
//!
//! Every mutating operation exists twice:
//!
//! - `try_create`, `try_add`, `try_remove` return a [`HookError`] listing
//!   every violated precondition and never log warnings.
//! - `create`, `add`, `remove` call their `try_` counterpart and report any
//!   failure (or an overwritten hook) as a single `warn` event. They never
//!   panic and return nothing.
//!
//! # Example
//!
//! ```
//! use shifty_hooks::{HookOwner, HookRegistry};
//!
//! #[derive(Default)]
//! struct Document {
//!     log: Vec<&'static str>,
//! }
//! impl HookOwner for Document {}
//!
//! let registry = HookRegistry::new();
//! registry.create::<Document>("save");
//! registry.add::<Document>("save", "validate", |doc| doc.log.push("validate"));
//! registry.add_with_priority::<Document>("save", "backup", |doc| doc.log.push("backup"), 20);
//!
//! let mut doc = Document::default();
//! registry.do_action(&mut doc, "save");
//! assert_eq!(doc.log, vec!["backup", "validate"]);
//! ```

use core::any::Any;
use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use crate::config::RegistryConfig;
use crate::error::{HookError, Operation, Registration, Violation};
use crate::owner::{HookOwner, OwnerId};
use crate::priority::Priority;
use crate::state::{HookList, HookState};

type StateMap = HashMap<OwnerId, Box<dyn Any + Send + Sync>>;

// ─────────────────────────────────────────────────────────────────────────────
// HookView
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot returned by [`HookRegistry::get`].
///
/// A view owns a copy of the hook maps taken under the read lock, with the
/// callbacks shared by `Arc`. It holds no lock, so the registry can be
/// mutated while a view is alive; call `get` again to observe the changes.
pub enum HookView<O: HookOwner> {
    /// A single hook list.
    List(HookList<O>),
    /// Every hook list of the owner.
    State(HookState<O>),
}

impl<O: HookOwner> HookView<O> {
    /// Returns the list, if this view holds one.
    #[must_use]
    pub fn as_list(&self) -> Option<&HookList<O>> {
        match self {
            HookView::List(list) => Some(list),
            HookView::State(_) => None,
        }
    }

    /// Returns the full state, if this view holds it.
    #[must_use]
    pub fn as_state(&self) -> Option<&HookState<O>> {
        match self {
            HookView::State(state) => Some(state),
            HookView::List(_) => None,
        }
    }
}

impl<O: HookOwner> Clone for HookView<O> {
    fn clone(&self) -> Self {
        match self {
            HookView::List(list) => HookView::List(list.clone()),
            HookView::State(state) => HookView::State(state.clone()),
        }
    }
}

impl<O: HookOwner> fmt::Debug for HookView<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookView::List(list) => f.debug_tuple("List").field(list).finish(),
            HookView::State(state) => f.debug_tuple("State").field(state).finish(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of hook lists, keyed by owner type.
///
/// Hook state for an owner is created by the first [`create`](Self::create)
/// and lives as long as the registry. Only individual hook entries can be
/// removed.
///
/// # Thread Safety
///
/// State is guarded by a [`RwLock`]. Callbacks never run while the lock is
/// held, so a callback may itself call `add`, `remove` or `do_action` on the
/// same registry. Recursion is not guarded against.
#[derive(Default)]
pub struct HookRegistry {
    config: RegistryConfig,
    states: RwLock<StateMap>,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states = self.states.read();
        f.debug_struct("HookRegistry")
            .field("config", &self.config)
            .field("owners", &states.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HookRegistry {
    /// Creates an empty registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            states: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the registry configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ── create ──────────────────────────────────────────────────────────────

    /// Declares the hook list `list` for owner type `O`.
    ///
    /// Creates the owner's hook state on first use.
    ///
    /// # Errors
    ///
    /// - [`Violation::EmptyListName`] if `list` is empty
    /// - [`Violation::AlreadyDeclared`] if the list exists; it is left untouched
    pub fn try_create<O: HookOwner>(&self, list: &str) -> Result<(), HookError> {
        let owner = OwnerId::of::<O>();
        if list.is_empty() {
            return Err(HookError::new(
                Operation::Create,
                owner,
                vec![Violation::EmptyListName],
            ));
        }

        let mut states = self.states.write();
        states
            .entry(owner)
            .or_insert_with(|| Box::new(HookState::<O>::default()));
        let Some(state) = state_mut::<O>(&mut states, owner) else {
            return Err(HookError::new(
                Operation::Create,
                owner,
                vec![Violation::NoHookState],
            ));
        };

        if !state.declare(list) {
            return Err(HookError::new(
                Operation::Create,
                owner,
                vec![Violation::AlreadyDeclared {
                    list: list.to_owned(),
                }],
            ));
        }

        tracing::debug!(owner = %owner, list, "hook list created");
        Ok(())
    }

    /// Declares the hook list `list` for owner type `O`, warning on failure.
    pub fn create<O: HookOwner>(&self, list: &str) {
        if let Err(error) = self.try_create::<O>(list) {
            warn_rejected(&error);
        }
    }

    // ── add ─────────────────────────────────────────────────────────────────

    /// Attaches `hook` to `list` under `hook_id` at the default priority.
    ///
    /// See [`try_add_with_priority`](Self::try_add_with_priority).
    ///
    /// # Errors
    ///
    /// Same as [`try_add_with_priority`](Self::try_add_with_priority).
    pub fn try_add<O: HookOwner>(
        &self,
        list: &str,
        hook_id: impl Into<String>,
        hook: impl Fn(&mut O) + Send + Sync + 'static,
    ) -> Result<Registration, HookError> {
        self.try_add_with_priority::<O>(list, hook_id, hook, self.config.default_priority)
    }

    /// Attaches `hook` to `list` under `hook_id` at `priority`.
    ///
    /// The priority bucket is created if needed. If `hook_id` already exists
    /// in that bucket, its callback is replaced in place and
    /// [`Registration::Replaced`] is returned.
    ///
    /// # Errors
    ///
    /// Returns every applicable reason at once:
    ///
    /// - [`Violation::NoHookState`] if no list was ever created for `O`
    /// - [`Violation::EmptyListName`] or [`Violation::ListNotDeclared`] if
    ///   `list` is not a declared list
    /// - [`Violation::EmptyHookId`] if `hook_id` is empty
    pub fn try_add_with_priority<O: HookOwner>(
        &self,
        list: &str,
        hook_id: impl Into<String>,
        hook: impl Fn(&mut O) + Send + Sync + 'static,
        priority: impl Into<Priority>,
    ) -> Result<Registration, HookError> {
        let owner = OwnerId::of::<O>();
        let hook_id = hook_id.into();
        let priority = priority.into();

        let mut states = self.states.write();
        let state = state_mut::<O>(&mut states, owner);

        let mut violations = check_list(state.as_deref(), list);
        if hook_id.is_empty() {
            violations.push(Violation::EmptyHookId);
        }
        if !violations.is_empty() {
            return Err(HookError::new(Operation::Add, owner, violations));
        }

        let Some(hook_list) = state.and_then(|state| state.get_mut(list)) else {
            return Err(HookError::new(
                Operation::Add,
                owner,
                vec![Violation::ListNotDeclared {
                    list: list.to_owned(),
                }],
            ));
        };

        let replaced = hook_list
            .bucket_entry(priority)
            .insert(hook_id, Arc::new(hook))
            .is_some();

        Ok(if replaced {
            Registration::Replaced
        } else {
            Registration::Inserted
        })
    }

    /// Attaches `hook` at the default priority, warning on failure or overwrite.
    pub fn add<O: HookOwner>(
        &self,
        list: &str,
        hook_id: impl Into<String>,
        hook: impl Fn(&mut O) + Send + Sync + 'static,
    ) {
        self.add_with_priority::<O>(list, hook_id, hook, self.config.default_priority);
    }

    /// Attaches `hook` at `priority`, warning on failure or overwrite.
    pub fn add_with_priority<O: HookOwner>(
        &self,
        list: &str,
        hook_id: impl Into<String>,
        hook: impl Fn(&mut O) + Send + Sync + 'static,
        priority: impl Into<Priority>,
    ) {
        let hook_id = hook_id.into();
        let priority = priority.into();

        match self.try_add_with_priority::<O>(list, hook_id.clone(), hook, priority) {
            Ok(Registration::Inserted) => {}
            Ok(Registration::Replaced) => {
                let owner = O::owner_name();
                tracing::warn!(
                    owner,
                    list,
                    hook_id = %hook_id,
                    priority = priority.get(),
                    "hook \"{hook_id}\" already exists in hook list \"{list}\" on priority \
                     \"{priority}\" of owner \"{owner}\", the existing hook was overridden"
                );
            }
            Err(error) => warn_rejected(&error),
        }
    }

    // ── remove ──────────────────────────────────────────────────────────────

    /// Detaches `hook_id` from `list` at the default priority.
    ///
    /// # Errors
    ///
    /// Same as [`try_remove_with_priority`](Self::try_remove_with_priority).
    pub fn try_remove<O: HookOwner>(&self, list: &str, hook_id: &str) -> Result<(), HookError> {
        self.try_remove_with_priority::<O>(list, hook_id, self.config.default_priority)
    }

    /// Detaches exactly the entry `(list, priority, hook_id)`.
    ///
    /// The bucket stays in place even when it becomes empty.
    ///
    /// # Errors
    ///
    /// Returns every applicable reason at once:
    ///
    /// - [`Violation::NoHookState`] if no list was ever created for `O`
    /// - [`Violation::EmptyListName`] or [`Violation::ListNotDeclared`]
    /// - [`Violation::PriorityMissing`] if the list has no bucket at `priority`
    /// - [`Violation::HookIdMissing`] if the bucket has no `hook_id`
    /// - [`Violation::EmptyHookId`] if `hook_id` is empty
    pub fn try_remove_with_priority<O: HookOwner>(
        &self,
        list: &str,
        hook_id: &str,
        priority: impl Into<Priority>,
    ) -> Result<(), HookError> {
        let owner = OwnerId::of::<O>();
        let priority = priority.into();

        let mut states = self.states.write();
        let state = state_mut::<O>(&mut states, owner);

        let mut violations = check_list(state.as_deref(), list);
        if let Some(hook_list) = state.as_deref().and_then(|state| state.get(list)) {
            match hook_list.bucket(priority) {
                None => violations.push(Violation::PriorityMissing {
                    list: list.to_owned(),
                    priority,
                }),
                Some(bucket) if !hook_id.is_empty() && !bucket.contains(hook_id) => {
                    violations.push(Violation::HookIdMissing {
                        list: list.to_owned(),
                        priority,
                        hook_id: hook_id.to_owned(),
                    });
                }
                Some(_) => {}
            }
        }
        if hook_id.is_empty() {
            violations.push(Violation::EmptyHookId);
        }
        if !violations.is_empty() {
            return Err(HookError::new(Operation::Remove, owner, violations));
        }

        let removed = state
            .and_then(|state| state.get_mut(list))
            .and_then(|hook_list| hook_list.bucket_mut(priority))
            .and_then(|bucket| bucket.remove(hook_id));
        debug_assert!(removed.is_some(), "validated hook entry vanished");

        tracing::debug!(owner = %owner, list, hook_id, priority = priority.get(), "hook removed");
        Ok(())
    }

    /// Detaches `hook_id` at the default priority, warning on failure.
    pub fn remove<O: HookOwner>(&self, list: &str, hook_id: &str) {
        self.remove_with_priority::<O>(list, hook_id, self.config.default_priority);
    }

    /// Detaches `(list, priority, hook_id)`, warning on failure.
    pub fn remove_with_priority<O: HookOwner>(
        &self,
        list: &str,
        hook_id: &str,
        priority: impl Into<Priority>,
    ) {
        if let Err(error) = self.try_remove_with_priority::<O>(list, hook_id, priority) {
            warn_rejected(&error);
        }
    }

    // ── get ─────────────────────────────────────────────────────────────────

    /// Returns a snapshot of `O`'s hooks.
    ///
    /// - `None` if no list was ever created for `O`
    /// - [`HookView::List`] if `list` names a declared list
    /// - [`HookView::State`] if `list` is `None` or names no declared list
    ///
    /// The read lock is released before returning.
    #[must_use]
    pub fn get<O: HookOwner>(&self, list: Option<&str>) -> Option<HookView<O>> {
        let state = self.read_state::<O>()?;
        match list.and_then(|name| state.get(name)) {
            Some(hook_list) => Some(HookView::List(hook_list.clone())),
            None => Some(HookView::State(HookState::clone(&state))),
        }
    }

    /// Returns a snapshot of every hook list of `O`.
    #[must_use]
    pub fn state<O: HookOwner>(&self) -> Option<HookState<O>> {
        self.read_state::<O>().map(|state| HookState::clone(&state))
    }

    /// Returns a snapshot of the hook list `name` of `O`.
    #[must_use]
    pub fn list<O: HookOwner>(&self, name: &str) -> Option<HookList<O>> {
        self.read_list::<O>(name).map(|list| HookList::clone(&list))
    }

    /// Returns `true` if `O` has a declared list named `name`.
    #[must_use]
    pub fn has_list<O: HookOwner>(&self, name: &str) -> bool {
        self.read_state::<O>()
            .is_some_and(|state| state.contains(name))
    }

    /// Returns the declared list names of `O`, sorted.
    #[must_use]
    pub fn list_names<O: HookOwner>(&self) -> Vec<String> {
        self.read_state::<O>()
            .map(|state| state.names().into_iter().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Returns the number of callbacks attached to `list`.
    #[must_use]
    pub fn hook_count<O: HookOwner>(&self, list: &str) -> usize {
        self.read_list::<O>(list)
            .map_or(0, |list| list.hook_count())
    }

    /// Returns `true` if `hook_id` is attached to `list` at `priority`.
    #[must_use]
    pub fn contains_hook<O: HookOwner>(
        &self,
        list: &str,
        hook_id: &str,
        priority: impl Into<Priority>,
    ) -> bool {
        let priority = priority.into();
        self.read_list::<O>(list)
            .is_some_and(|list| list.contains(priority, hook_id))
    }

    // ── do_action ───────────────────────────────────────────────────────────

    /// Invokes every callback attached to `list`, passing `owner`.
    ///
    /// Buckets are visited per [`RegistryConfig::dispatch_order`]; callbacks
    /// within a bucket run in insertion order. Does nothing if `list` was
    /// never declared.
    ///
    /// Callbacks are snapshotted before the first one runs. Hooks added or
    /// removed by a callback take effect on the next dispatch.
    pub fn do_action<O: HookOwner>(&self, owner: &mut O, list: &str) {
        let Some(hooks) = self
            .read_list::<O>(list)
            .map(|hook_list| hook_list.snapshot(self.config.dispatch_order))
        else {
            tracing::trace!(owner = O::owner_name(), list, "no such hook list, skipping");
            return;
        };

        for (hook_id, hook) in hooks {
            if self.config.log_invocations {
                tracing::info!(
                    owner = O::owner_name(),
                    list,
                    hook_id = %hook_id,
                    "hook {hook_id} invoked"
                );
            }
            hook(&mut *owner);
        }
    }

    // Guards returned here must not outlive the calling method.
    fn read_state<O: HookOwner>(&self) -> Option<MappedRwLockReadGuard<'_, HookState<O>>> {
        let owner = OwnerId::of::<O>();
        RwLockReadGuard::try_map(self.states.read(), |states| {
            states
                .get(&owner)
                .and_then(|state| state.downcast_ref::<HookState<O>>())
        })
        .ok()
    }

    fn read_list<O: HookOwner>(&self, name: &str) -> Option<MappedRwLockReadGuard<'_, HookList<O>>> {
        MappedRwLockReadGuard::try_map(self.read_state::<O>()?, |state| state.get(name)).ok()
    }
}

fn state_mut<O: HookOwner>(states: &mut StateMap, owner: OwnerId) -> Option<&mut HookState<O>> {
    states.get_mut(&owner)?.downcast_mut::<HookState<O>>()
}

fn check_list<O: HookOwner>(state: Option<&HookState<O>>, list: &str) -> Vec<Violation> {
    match state {
        None => vec![Violation::NoHookState],
        Some(_) if list.is_empty() => vec![Violation::EmptyListName],
        Some(state) if !state.contains(list) => vec![Violation::ListNotDeclared {
            list: list.to_owned(),
        }],
        Some(_) => Vec::new(),
    }
}

fn warn_rejected(error: &HookError) {
    tracing::warn!(
        owner = %error.owner(),
        operation = ?error.operation(),
        "{error}"
    );
}
