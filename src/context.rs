//! Card context provider.
//!
//! The card state lives in one [`CardHandle`] provided by `App`. Components
//! read state through it and send it [`CardEvent`]s; the handle runs the
//! pure transition from `valentine_core` and stores the result.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_card_provider(&config, seed);
//!
//! // In child components
//! let card = use_card();
//! let answered = card.state().read().answered();
//! card.dispatch(CardEvent::Accept);
//! ```

use dioxus::prelude::*;
use valentine_core::{CardConfig, CardEvent, CardRng, CardState, CardTuning};

/// Get the card config resolved at startup.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Get the seed for cosmetic randomness (if set via --seed).
pub fn get_random_seed() -> Option<u64> {
    crate::get_random_seed()
}

/// Hook to access the card config from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Shared card state plus what its transitions need.
#[derive(Clone, Copy, PartialEq)]
pub struct CardHandle {
    state: Signal<CardState>,
    rng: Signal<CardRng>,
    tuning: Signal<CardTuning>,
}

impl CardHandle {
    /// Reactive card state.
    pub fn state(&self) -> Signal<CardState> {
        self.state
    }

    /// Run one transition and store the new state.
    pub fn dispatch(mut self, event: CardEvent) {
        let next = {
            let current = self.state.peek().clone();
            let tuning = self.tuning.peek();
            let mut rng = self.rng.write();
            current.apply(event, &mut *rng, &tuning)
        };
        self.state.set(next);
    }

    /// Draw cosmetic values from the card's random source.
    pub fn with_rng<T>(mut self, f: impl FnOnce(&mut CardRng) -> T) -> T {
        let mut rng = self.rng.write();
        f(&mut *rng)
    }
}

/// Create the card state and provide it to all child components.
pub fn use_card_provider(config: &CardConfig, seed: Option<u64>) -> CardHandle {
    let tuning = config.tuning();
    let state = use_signal(CardState::new);
    let rng = use_signal(|| CardRng::from_seed(seed));
    let tuning = use_signal(move || tuning);

    use_context_provider(|| CardHandle { state, rng, tuning })
}

/// Hook to access the card from context.
pub fn use_card() -> CardHandle {
    use_context::<CardHandle>()
}
