//! Property-based tests for the selection state machine
//!
//! Tests invariants:
//! - Advance/Retreat are inverse pairs
//! - Advancing `count` times is the identity
//! - Select(i) yields index = i and an open modal
//! - Dismiss closes the modal without moving focus

use proptest::prelude::*;

use crate::core::selector::{SelectionState, Transition};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// A roster size and a reachable state within it.
fn arb_state() -> impl Strategy<Value = (usize, SelectionState)> {
    (1usize..=32).prop_flat_map(|count| {
        (Just(count), 0..count, any::<bool>())
            .prop_map(|(count, index, modal_open)| (count, SelectionState { index, modal_open }))
    })
}

/// Any in-range transition for a roster of `count`.
fn arb_transition(count: usize) -> impl Strategy<Value = Transition> {
    prop_oneof![
        Just(Transition::Advance),
        Just(Transition::Retreat),
        Just(Transition::Dismiss),
        (0..count).prop_map(Transition::Select),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Advance then Retreat (and the reverse) restores the index
    #[test]
    fn prop_advance_retreat_inverse((count, state) in arb_state()) {
        let there_and_back = state
            .apply(Transition::Advance, count)
            .and_then(|s| s.apply(Transition::Retreat, count))
            .unwrap();
        prop_assert_eq!(there_and_back, state);

        let back_and_there = state
            .apply(Transition::Retreat, count)
            .and_then(|s| s.apply(Transition::Advance, count))
            .unwrap();
        prop_assert_eq!(back_and_there, state);
    }

    /// Property: `count` advances form a full cycle
    #[test]
    fn prop_full_cycle((count, state) in arb_state()) {
        let mut current = state;
        for _ in 0..count {
            current = current.apply(Transition::Advance, count).unwrap();
        }
        prop_assert_eq!(current, state);
    }

    /// Property: Select(i) always focuses i and opens the modal
    #[test]
    fn prop_select_focuses_and_opens(
        (count, state, target) in arb_state()
            .prop_flat_map(|(count, state)| (Just(count), Just(state), 0..count))
    ) {
        let next = state.apply(Transition::Select(target), count).unwrap();
        prop_assert_eq!(next, SelectionState { index: target, modal_open: true });
    }

    /// Property: Dismiss closes the modal and never moves focus
    #[test]
    fn prop_dismiss_keeps_index((count, state) in arb_state()) {
        let next = state.apply(Transition::Dismiss, count).unwrap();
        prop_assert!(!next.modal_open);
        prop_assert_eq!(next.index, state.index);
    }

    /// Property: any transition sequence keeps the index in range
    #[test]
    fn prop_index_stays_in_range(
        (count, transitions) in (1usize..=16).prop_flat_map(|count| {
            (Just(count), prop::collection::vec(arb_transition(count), 0..64))
        })
    ) {
        let mut state = SelectionState::default();
        for transition in transitions {
            state = state.apply(transition, count).unwrap();
            prop_assert!(state.index < count);
        }
    }

    /// Property: Advance/Retreat never touch the modal flag
    #[test]
    fn prop_navigation_preserves_modal((count, state) in arb_state()) {
        for transition in [Transition::Advance, Transition::Retreat] {
            let next = state.apply(transition, count).unwrap();
            prop_assert_eq!(next.modal_open, state.modal_open);
        }
    }
}
