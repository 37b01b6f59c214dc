//! Error types for hook registry operations.
//!
//! Failures are never fatal. The `try_*` operations on
//! [`HookRegistry`](crate::HookRegistry) return them so callers can react;
//! the plain operations log them as a single warning instead.

use core::fmt;

use crate::owner::OwnerId;
use crate::priority::Priority;

/// A single failed precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The hook list name was empty.
    #[error("no hook list name was provided")]
    EmptyListName,

    /// The hook id was empty.
    #[error("no hook id was provided")]
    EmptyHookId,

    /// No hook list was ever created for the owner.
    #[error("the owner has no hook lists created")]
    NoHookState,

    /// `create` targeted a list that already exists.
    #[error("the hook list \"{list}\" already exists")]
    AlreadyDeclared {
        /// The list name.
        list: String,
    },

    /// The targeted list was never created.
    #[error("the hook list \"{list}\" doesn't exist")]
    ListNotDeclared {
        /// The list name.
        list: String,
    },

    /// `remove` targeted a priority with no bucket.
    #[error("the priority \"{priority}\" on hook list \"{list}\" doesn't exist")]
    PriorityMissing {
        /// The list name.
        list: String,
        /// The missing priority.
        priority: Priority,
    },

    /// `remove` targeted a hook id absent from its bucket.
    #[error(
        "the hook id \"{hook_id}\" doesn't exist on priority \"{priority}\" on hook list \"{list}\""
    )]
    HookIdMissing {
        /// The list name.
        list: String,
        /// The priority searched.
        priority: Priority,
        /// The missing hook id.
        hook_id: String,
    },
}

/// Registry operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Declaring a hook list.
    Create,
    /// Attaching a callback.
    Add,
    /// Detaching a callback.
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Create => "creating hook list",
            Operation::Add => "adding hook",
            Operation::Remove => "removing hook",
        };
        f.write_str(verb)
    }
}

/// A rejected registry operation with every precondition it violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} on owner \"{owner}\" failed since {}", join(.violations))]
pub struct HookError {
    operation: Operation,
    owner: OwnerId,
    violations: Vec<Violation>,
}

impl HookError {
    pub(crate) fn new(operation: Operation, owner: OwnerId, violations: Vec<Violation>) -> Self {
        Self {
            operation,
            owner,
            violations,
        }
    }

    /// Returns the failed operation.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the owner the operation targeted.
    #[must_use]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns every violated precondition, in check order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `true` if `violation` is among the reasons.
    #[must_use]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Successful outcome of an `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The hook id was new in its bucket.
    Inserted,
    /// An existing callback with the same id was overwritten.
    Replaced,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::HookOwner;

    struct Panel;
    impl HookOwner for Panel {
        fn owner_name() -> &'static str {
            "Panel"
        }
    }

    #[test]
    fn message_joins_all_violations() {
        let error = HookError::new(
            Operation::Add,
            OwnerId::of::<Panel>(),
            vec![
                Violation::ListNotDeclared {
                    list: "render".into(),
                },
                Violation::EmptyHookId,
            ],
        );
        assert_eq!(
            error.to_string(),
            "adding hook on owner \"Panel\" failed since the hook list \"render\" doesn't exist, \
             no hook id was provided"
        );
    }

    #[test]
    fn hook_id_missing_names_every_coordinate() {
        let violation = Violation::HookIdMissing {
            list: "init".into(),
            priority: Priority::new(15),
            hook_id: "audit".into(),
        };
        assert_eq!(
            violation.to_string(),
            "the hook id \"audit\" doesn't exist on priority \"15\" on hook list \"init\""
        );
    }

    #[test]
    fn accessors_expose_structure() {
        let error = HookError::new(
            Operation::Remove,
            OwnerId::of::<Panel>(),
            vec![Violation::NoHookState],
        );
        assert_eq!(error.operation(), Operation::Remove);
        assert_eq!(error.owner().name(), "Panel");
        assert!(error.contains(&Violation::NoHookState));
        assert!(!error.contains(&Violation::EmptyHookId));
    }
}
