//! Behavioural tests for the public `HookRegistry` API.


use shifty_hooks::{
    DispatchOrder, HookRegistry, HookView, Priority, Registration, RegistryConfig, Violation,
};
use test_utils::{Recorder, record};

fn registry_with(lists: &[&str]) -> HookRegistry {
    let registry = HookRegistry::new();
    for list in lists {
        registry
            .try_create::<Recorder>(list)
            .expect("list should be created");
    }
    registry
}

// ═══════════════════════════════════════════════════════════════════════════════
// CREATE / ADD
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn create_then_add_registers_under_default_priority() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "id", record("id"));

    let list = registry.list::<Recorder>("L").expect("list exists");
    let bucket = list.bucket(Priority::new(10)).expect("bucket at 10");
    assert!(bucket.contains("id"));
    assert_eq!(list.priorities().collect::<Vec<_>>(), vec![Priority::new(10)]);
}

#[test]
fn omitted_priority_equals_explicit_ten() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "implicit", record("implicit"));
    registry.add_with_priority::<Recorder>("L", "explicit", record("explicit"), 10);

    let list = registry.list::<Recorder>("L").unwrap();
    assert_eq!(list.bucket_count(), 1);
    assert_eq!(
        list.bucket(Priority::DEFAULT).unwrap().ids().collect::<Vec<_>>(),
        vec!["implicit", "explicit"]
    );
}

#[test]
fn create_twice_keeps_first_list() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "kept", record("kept"));

    let err = registry.try_create::<Recorder>("L").unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::AlreadyDeclared { list: "L".into() }]
    );

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["kept"]);
}

#[test]
fn add_without_create_does_not_mutate() {
    let registry = HookRegistry::new();
    registry.add::<Recorder>("L", "id", record("id"));
    assert!(registry.get::<Recorder>(Some("L")).is_none());

    registry.create::<Recorder>("other");
    registry.add::<Recorder>("L", "id", record("id"));
    assert!(!registry.has_list::<Recorder>("L"));
    assert!(matches!(
        registry.get::<Recorder>(Some("L")),
        Some(HookView::State(_))
    ));
}

#[test]
fn overwrite_reports_replacement() {
    let registry = registry_with(&["L"]);
    let first = registry
        .try_add_with_priority::<Recorder>("L", "id", record("first"), 3)
        .unwrap();
    let second = registry
        .try_add_with_priority::<Recorder>("L", "id", record("second"), 3)
        .unwrap();
    let elsewhere = registry
        .try_add_with_priority::<Recorder>("L", "id", record("elsewhere"), 4)
        .unwrap();

    assert_eq!(first, Registration::Inserted);
    assert_eq!(second, Registration::Replaced);
    assert_eq!(elsewhere, Registration::Inserted);

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["elsewhere", "second"]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// REMOVE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn remove_targets_only_one_priority() {
    let registry = registry_with(&["L"]);
    registry.add_with_priority::<Recorder>("L", "id", record("at-5"), 5);
    registry.add_with_priority::<Recorder>("L", "id", record("at-20"), 20);

    registry
        .try_remove_with_priority::<Recorder>("L", "id", 5)
        .expect("entry exists");

    assert!(!registry.contains_hook::<Recorder>("L", "id", 5));
    assert!(registry.contains_hook::<Recorder>("L", "id", 20));

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["at-20"]);
}

#[test]
fn remove_of_missing_entry_is_safe() {
    let registry = registry_with(&["L"]);
    registry.remove::<Recorder>("L", "ghost");
    registry.remove::<Recorder>("missing", "ghost");
    registry.remove_with_priority::<Recorder>("L", "ghost", -7);
    assert_eq!(registry.hook_count::<Recorder>("L"), 0);
}

#[test]
fn remove_on_undeclared_list_lists_reason() {
    let registry = registry_with(&["L"]);
    let err = registry.try_remove::<Recorder>("M", "").unwrap_err();
    assert_eq!(
        err.violations(),
        &[
            Violation::ListNotDeclared { list: "M".into() },
            Violation::EmptyHookId
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// DO_ACTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn higher_priority_runs_first() {
    let registry = registry_with(&["L"]);
    registry.add_with_priority::<Recorder>("L", "a", record("a"), 5);
    registry.add_with_priority::<Recorder>("L", "b", record("b"), 20);

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["b", "a"]);
}

#[test]
fn descending_order_ignores_insertion_sequence() {
    let registry = registry_with(&["L"]);
    for (id, priority) in [("p1", 1), ("p30", 30), ("n5", -5), ("p10", 10), ("p0", 0)] {
        registry.add_with_priority::<Recorder>("L", id, record(id), priority);
    }

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["p30", "p10", "p1", "p0", "n5"]);
}

#[test]
fn reverse_insertion_order_is_exact_reverse_of_bucket_creation() {
    let registry = HookRegistry::with_config(
        RegistryConfig::new().with_dispatch_order(DispatchOrder::ReverseInsertion),
    );
    registry.create::<Recorder>("L");
    for (id, priority) in [("first", 5), ("second", 20), ("third", 1), ("again", 5)] {
        registry.add_with_priority::<Recorder>("L", id, record(id), priority);
    }

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["third", "second", "first", "again"]);
}

#[test]
fn same_bucket_runs_in_insertion_order() {
    let registry = registry_with(&["L"]);
    for id in ["x", "y", "z"] {
        registry.add::<Recorder>("L", id, record(id));
    }
    registry.remove::<Recorder>("L", "y");
    registry.add::<Recorder>("L", "y", record("y"));

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["x", "z", "y"]);
}

#[test]
fn missing_list_dispatch_invokes_nothing() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "a", record("a"));

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "nonexistent");
    assert!(recorder.calls.is_empty());
}

#[test]
fn dispatch_can_run_repeatedly() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "a", record("a"));

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    registry.do_action(&mut recorder, "L");
    assert_eq!(recorder.calls(), vec!["a", "a"]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// GET
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn get_without_name_returns_every_list() {
    let registry = registry_with(&["L1", "L2"]);
    registry.add_with_priority::<Recorder>("L1", "a", record("a"), 7);

    let view = registry.get::<Recorder>(None).expect("state exists");
    let state = view.as_state().expect("full state");
    assert!(state.contains("L1"));
    assert!(state.contains("L2"));
    assert_eq!(state.len(), 2);

    let view = registry.get::<Recorder>(Some("L1")).expect("list exists");
    let list = view.as_list().expect("single list");
    assert_eq!(list.priorities().collect::<Vec<_>>(), vec![Priority::new(7)]);
}

#[test]
fn get_reflects_current_registrations() {
    let registry = registry_with(&["L"]);
    let before = registry.get::<Recorder>(Some("L")).unwrap();

    registry.add::<Recorder>("L", "a", record("a"));
    let after = registry.get::<Recorder>(Some("L")).unwrap();

    assert_eq!(before.as_list().unwrap().hook_count(), 0);
    assert_eq!(after.as_list().unwrap().hook_count(), 1);
}

#[test]
fn view_stays_usable_across_mutations() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "a", record("a"));
    let view = registry.get::<Recorder>(None).unwrap();

    registry.remove::<Recorder>("L", "a");
    registry.create::<Recorder>("M");

    let state = view.as_state().unwrap();
    assert_eq!(state.names(), vec!["L"]);
    assert_eq!(state.get("L").unwrap().hook_count(), 1);
    assert_eq!(registry.list_names::<Recorder>(), vec!["L".to_string(), "M".to_string()]);
}

#[test]
fn list_names_are_sorted() {
    let registry = registry_with(&["zeta", "alpha", "mid"]);
    assert_eq!(
        registry.list_names::<Recorder>(),
        vec!["alpha".to_string(), "mid".to_string(), "zeta".to_string()]
    );
}

#[test]
fn debug_output_names_hooks() {
    let registry = registry_with(&["L"]);
    registry.add::<Recorder>("L", "audit", record("audit"));

    let rendered = format!("{:?}", registry.get::<Recorder>(Some("L")).unwrap());
    assert!(rendered.contains("audit"), "{rendered}");
}
