//! Property tests for dispatch order.
//!
//! For an arbitrary sequence of registrations, each with a unique hook id,
//! the dispatch order must equal a model computed independently of the
//! registry:
//!
//! - `Descending`: stable sort of the registrations by priority, highest first
//! - `ReverseInsertion`: buckets in reverse first-use order, registrations
//!   inside a bucket in insertion order


use proptest::prelude::*;
use shifty_hooks::{DispatchOrder, HookRegistry, RegistryConfig};
use test_utils::{Recorder, record};

fn dispatch(order: DispatchOrder, priorities: &[i32]) -> Vec<String> {
    let registry = HookRegistry::with_config(
        RegistryConfig::new()
            .with_dispatch_order(order)
            .with_invocation_logging(false),
    );
    registry.create::<Recorder>("L");
    for (i, priority) in priorities.iter().enumerate() {
        let id = format!("h{i}");
        registry.add_with_priority::<Recorder>("L", id.clone(), record(&id), *priority);
    }

    let mut recorder = Recorder::default();
    registry.do_action(&mut recorder, "L");
    recorder.calls
}

fn descending_model(priorities: &[i32]) -> Vec<String> {
    let mut indexed: Vec<(usize, i32)> = priorities.iter().copied().enumerate().collect();
    indexed.sort_by_key(|(_, priority)| core::cmp::Reverse(*priority));
    indexed.into_iter().map(|(i, _)| format!("h{i}")).collect()
}

fn reverse_insertion_model(priorities: &[i32]) -> Vec<String> {
    let mut first_use: Vec<i32> = Vec::new();
    for priority in priorities {
        if !first_use.contains(priority) {
            first_use.push(*priority);
        }
    }
    first_use
        .into_iter()
        .rev()
        .flat_map(|bucket| {
            priorities
                .iter()
                .enumerate()
                .filter(move |(_, priority)| **priority == bucket)
                .map(|(i, _)| format!("h{i}"))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_descending_matches_model(priorities in prop::collection::vec(-5i32..=5, 0..24)) {
        prop_assert_eq!(
            dispatch(DispatchOrder::Descending, &priorities),
            descending_model(&priorities)
        );
    }

    #[test]
    fn prop_reverse_insertion_matches_model(priorities in prop::collection::vec(-5i32..=5, 0..24)) {
        prop_assert_eq!(
            dispatch(DispatchOrder::ReverseInsertion, &priorities),
            reverse_insertion_model(&priorities)
        );
    }

    #[test]
    fn prop_every_hook_runs_once(priorities in prop::collection::vec(any::<i32>(), 0..16)) {
        let calls = dispatch(DispatchOrder::Descending, &priorities);
        prop_assert_eq!(calls.len(), priorities.len());
    }
}
