//! Hook state containers.
//!
//! The containers nest as follows:
//!
//! ```text
//! HookState<O>      list name -> HookList<O>
//! HookList<O>       Priority  -> PriorityBucket<O>
//! PriorityBucket<O> hook id   -> HookFn<O>
//! ```
//!
//! Only the registry mutates these structures. Callers receive clones of
//! them through [`HookView`](crate::HookView); cloning copies the maps and
//! shares the callbacks.

use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::config::DispatchOrder;
use crate::owner::HookOwner;
use crate::priority::Priority;

/// A registered hook callback. Receives the owner as its only argument.
pub type HookFn<O> = Arc<dyn Fn(&mut O) + Send + Sync>;

// ─────────────────────────────────────────────────────────────────────────────
// PriorityBucket
// ─────────────────────────────────────────────────────────────────────────────

/// Callbacks registered at one priority level, keyed by hook id.
///
/// Iteration follows insertion order. Replacing a callback keeps its slot.
pub struct PriorityBucket<O: HookOwner> {
    hooks: IndexMap<String, HookFn<O>>,
}

impl<O: HookOwner> Default for PriorityBucket<O> {
    fn default() -> Self {
        Self {
            hooks: IndexMap::new(),
        }
    }
}

impl<O: HookOwner> Clone for PriorityBucket<O> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<O: HookOwner> PriorityBucket<O> {
    /// Returns the number of callbacks in the bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if the bucket holds no callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns `true` if a callback is registered under `hook_id`.
    #[must_use]
    pub fn contains(&self, hook_id: &str) -> bool {
        self.hooks.contains_key(hook_id)
    }

    /// Returns the callback registered under `hook_id`.
    #[must_use]
    pub fn get(&self, hook_id: &str) -> Option<&HookFn<O>> {
        self.hooks.get(hook_id)
    }

    /// Returns hook ids in invocation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Inserts a callback, returning the one it replaced.
    pub(crate) fn insert(&mut self, hook_id: String, hook: HookFn<O>) -> Option<HookFn<O>> {
        self.hooks.insert(hook_id, hook)
    }

    /// Removes a callback while keeping the order of the remaining ones.
    pub(crate) fn remove(&mut self, hook_id: &str) -> Option<HookFn<O>> {
        self.hooks.shift_remove(hook_id)
    }
}

impl<O: HookOwner> fmt::Debug for PriorityBucket<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookList
// ─────────────────────────────────────────────────────────────────────────────

/// A named hook list: priority buckets in the order they were first used.
pub struct HookList<O: HookOwner> {
    buckets: IndexMap<Priority, PriorityBucket<O>>,
}

impl<O: HookOwner> Default for HookList<O> {
    fn default() -> Self {
        Self {
            buckets: IndexMap::new(),
        }
    }
}

impl<O: HookOwner> Clone for HookList<O> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
        }
    }
}

impl<O: HookOwner> HookList<O> {
    /// Returns the bucket at `priority`.
    #[must_use]
    pub fn bucket(&self, priority: Priority) -> Option<&PriorityBucket<O>> {
        self.buckets.get(&priority)
    }

    /// Returns the priorities in bucket creation order.
    pub fn priorities(&self) -> impl Iterator<Item = Priority> + '_ {
        self.buckets.keys().copied()
    }

    /// Returns the number of priority buckets, empty ones included.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of callbacks across all buckets.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.buckets.values().map(PriorityBucket::len).sum()
    }

    /// Returns `true` if `hook_id` is registered at `priority`.
    #[must_use]
    pub fn contains(&self, priority: Priority, hook_id: &str) -> bool {
        self.bucket(priority)
            .is_some_and(|bucket| bucket.contains(hook_id))
    }

    /// Returns the buckets in the order `do_action` visits them.
    #[must_use]
    pub fn dispatch_order(&self, order: DispatchOrder) -> Vec<(Priority, &PriorityBucket<O>)> {
        let mut buckets: Vec<_> = self
            .buckets
            .iter()
            .map(|(priority, bucket)| (*priority, bucket))
            .collect();
        match order {
            DispatchOrder::Descending => {
                buckets.sort_by_key(|(priority, _)| core::cmp::Reverse(*priority));
            }
            DispatchOrder::ReverseInsertion => buckets.reverse(),
        }
        buckets
    }

    /// Clones the callbacks out in dispatch order so they can run unlocked.
    pub(crate) fn snapshot(&self, order: DispatchOrder) -> Vec<(String, HookFn<O>)> {
        self.dispatch_order(order)
            .into_iter()
            .flat_map(|(_, bucket)| {
                bucket
                    .hooks
                    .iter()
                    .map(|(id, hook)| (id.clone(), Arc::clone(hook)))
            })
            .collect()
    }

    pub(crate) fn bucket_entry(&mut self, priority: Priority) -> &mut PriorityBucket<O> {
        self.buckets.entry(priority).or_default()
    }

    pub(crate) fn bucket_mut(&mut self, priority: Priority) -> Option<&mut PriorityBucket<O>> {
        self.buckets.get_mut(&priority)
    }
}

impl<O: HookOwner> fmt::Debug for HookList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookState
// ─────────────────────────────────────────────────────────────────────────────

/// All hook lists declared for one owner type.
pub struct HookState<O: HookOwner> {
    lists: HashMap<String, HookList<O>>,
}

impl<O: HookOwner> Default for HookState<O> {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }
}

impl<O: HookOwner> Clone for HookState<O> {
    fn clone(&self) -> Self {
        Self {
            lists: self.lists.clone(),
        }
    }
}

impl<O: HookOwner> HookState<O> {
    /// Returns the list named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HookList<O>> {
        self.lists.get(name)
    }

    /// Returns `true` if a list named `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// Returns the declared list names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of declared lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if no list has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterates over `(name, list)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HookList<O>)> {
        self.lists.iter().map(|(name, list)| (name.as_str(), list))
    }

    /// Declares an empty list. Returns `false` if it already existed.
    pub(crate) fn declare(&mut self, name: &str) -> bool {
        if self.lists.contains_key(name) {
            return false;
        }
        self.lists.insert(name.to_owned(), HookList::default());
        true
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut HookList<O>> {
        self.lists.get_mut(name)
    }
}

impl<O: HookOwner> fmt::Debug for HookState<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.lists.iter()).finish()
    }
}
