//! Valentine Proposal Card Core Library
//!
//! Everything behind the card that does not need a renderer.
//!
//! ## Overview
//!
//! The card asks one question with two buttons. "Yes" moves it to a
//! celebration with a confetti burst; "No" runs away from the pointer.
//! "Ask Again" brings the question back.
//!
//! - [`state`]: the `Asking` / `Celebrating` state machine as pure transitions
//! - [`random`]: pluggable randomness, so tests can replay exact draws
//! - [`animation`]: motion descriptors as data, with CSS renderers
//! - [`confetti`], [`backdrop`], [`title`]: cosmetic layouts drawn from the above
//! - [`config`]: card text and tuning from JSON
//!
//! ## Quick Start
//!
//! ```
//! use valentine_core::{CardEvent, CardState, CardTuning, FixedSequence};
//!
//! let tuning = CardTuning::default();
//! let mut rng = FixedSequence::new(vec![0.5]);
//!
//! let state = CardState::new().apply(CardEvent::Accept, &mut rng, &tuning);
//! assert!(state.accepted());
//!
//! let state = state.apply(CardEvent::Reset, &mut rng, &tuning);
//! assert!(!state.answered());
//! ```

pub mod animation;
pub mod backdrop;
pub mod config;
pub mod confetti;
pub mod error;
pub mod geometry;
pub mod random;
pub mod state;
pub mod title;

// Re-exports
pub use backdrop::{BackdropSpec, FloatingGlyph};
pub use config::CardConfig;
pub use confetti::{ConfettiBurst, ConfettiParticle, ConfettiSpec};
pub use error::{CardError, CardResult};
pub use geometry::{Offset, Point};
pub use random::{CardRng, FixedSequence, RandomSource, SeededRandom, ThreadRandom};
pub use state::{CardEvent, CardPhase, CardState, CardTuning};
pub use title::RevealedChar;
