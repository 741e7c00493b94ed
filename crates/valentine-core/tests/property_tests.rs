//! Property-based tests for the card state machine
//!
//! Uses proptest to drive random event sequences through CardState and
//! check the invariants that must hold after every step.

use proptest::prelude::*;
use valentine_core::{
    CardEvent, CardState, CardTuning, FixedSequence, Offset, Point, SeededRandom,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn point_strategy() -> impl Strategy<Value = Point> {
    (-4000.0..4000.0f64, -4000.0..4000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn event_strategy() -> impl Strategy<Value = CardEvent> {
    prop_oneof![
        2 => Just(CardEvent::Accept),
        2 => Just(CardEvent::Reset),
        3 => Just(CardEvent::DeclineEngage),
        1 => Just(CardEvent::DeclineDisengage),
        2 => point_strategy().prop_map(CardEvent::PointerMoved),
    ]
}

fn events_strategy(max_events: usize) -> impl Strategy<Value = Vec<CardEvent>> {
    prop::collection::vec(event_strategy(), 0..max_events)
}

/// Unit draws, including the closed endpoints
fn draws_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(0.0), Just(1.0), 0.0..=1.0f64],
        1..16,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// accepted is true exactly when the last accept/reset was an accept,
    /// and accepted always implies answered
    #[test]
    fn accepted_tracks_last_terminal_action(
        events in events_strategy(60),
        seed in any::<u64>(),
    ) {
        let tuning = CardTuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = CardState::new();
        let mut last_terminal_was_accept = false;

        for event in events {
            match event {
                CardEvent::Accept => last_terminal_was_accept = true,
                CardEvent::Reset => last_terminal_was_accept = false,
                _ => {}
            }
            state = state.apply(event, &mut rng, &tuning);

            prop_assert_eq!(state.accepted(), last_terminal_was_accept);
            prop_assert!(!state.accepted() || state.answered());
            prop_assert_eq!(state.burst().is_some(), state.accepted());
        }
    }

    /// Engaging decline always lands inside [-100, 100] on both axes
    #[test]
    fn evasion_stays_in_range(draws in draws_strategy(), engagements in 1..100usize) {
        let tuning = CardTuning::default();
        let mut rng = FixedSequence::new(draws);
        let mut state = CardState::new();

        for _ in 0..engagements {
            state = state.decline_engage(&mut rng, &tuning);
            prop_assert!(state.evasion.within(100.0), "offset {:?} out of range", state.evasion);
        }
    }

    /// Any range the config accepts keeps the offset finite and inside it
    #[test]
    fn evasion_within_any_valid_range(
        range in 1e-3..=valentine_core::config::MAX_EVASION_RANGE,
        draws in draws_strategy(),
    ) {
        let tuning = CardTuning { evasion_range: range, ..CardTuning::default() };
        let mut rng = FixedSequence::new(draws);
        let state = CardState::new().decline_engage(&mut rng, &tuning);
        prop_assert!(state.evasion.x.is_finite() && state.evasion.y.is_finite());
        prop_assert!(state.evasion.within(range), "offset {:?} outside {}", state.evasion, range);
    }

    /// Disengaging zeroes the offset whatever it was before
    #[test]
    fn disengage_zeroes_any_offset(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        let mut state = CardState::new();
        state.evasion = Offset::new(x, y);
        let state = state.decline_disengage();
        prop_assert_eq!(state.evasion, Offset::ZERO);
    }

    /// Accepting twice in a row leaves the same state as accepting once
    #[test]
    fn accept_is_idempotent(events in events_strategy(20), seed in any::<u64>()) {
        let tuning = CardTuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = CardState::new();
        for event in events {
            state = state.apply(event, &mut rng, &tuning);
        }

        let once = state.apply(CardEvent::Accept, &mut rng, &tuning);
        let twice = once.clone().apply(CardEvent::Accept, &mut rng, &tuning);
        prop_assert_eq!(once, twice);
    }

    /// Confetti trajectories are fixed at acceptance; pointer traffic does not touch them
    #[test]
    fn burst_is_stable_while_celebrating(
        moves in prop::collection::vec(point_strategy(), 0..50),
        seed in any::<u64>(),
    ) {
        let tuning = CardTuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = CardState::new().accept(&mut rng, &tuning);
        let burst = state.burst().cloned();

        for point in moves {
            state = state.pointer_moved(point).decline_engage(&mut rng, &tuning);
        }
        prop_assert_eq!(state.burst().cloned(), burst);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_accept_then_reset() {
    let tuning = CardTuning::default();
    let mut rng = FixedSequence::new(vec![0.42]);

    let state = CardState::new();
    assert!(!state.answered() && !state.accepted());

    let state = state.apply(CardEvent::Accept, &mut rng, &tuning);
    assert!(state.answered() && state.accepted());

    let state = state.apply(CardEvent::Reset, &mut rng, &tuning);
    assert!(!state.answered() && !state.accepted());
    assert!(state.burst().is_none(), "no confetti may survive a reset");
}

#[test]
fn scenario_hundred_engagements() {
    let tuning = CardTuning::default();
    let mut rng = SeededRandom::new(2026);
    let mut state = CardState::new();

    for _ in 0..100 {
        state = state.apply(CardEvent::DeclineEngage, &mut rng, &tuning);
        assert!((-100.0..=100.0).contains(&state.evasion.x));
        assert!((-100.0..=100.0).contains(&state.evasion.y));
    }
    assert!(!state.answered(), "declining never answers the question");
}
