//! The proposal card state machine.
//!
//! ```text
//!            accept
//!   Asking ─────────▶ Celebrating
//!     ▲                    │
//!     └────── reset ───────┘
//! ```
//!
//! There is no declined state: engaging the decline control only moves it.
//! Every transition is a pure function of the current state, the event, a
//! [`RandomSource`] and the [`CardTuning`], so the machine runs the same
//! with or without a rendering engine attached.

use crate::confetti::{ConfettiBurst, ConfettiSpec};
use crate::geometry::{Offset, Point};
use crate::random::RandomSource;

/// Default half-width of the evasion square, in pixels.
pub const DEFAULT_EVASION_RANGE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardPhase {
    /// Showing the question and both buttons
    #[default]
    Asking,
    /// Showing the success panel, with the burst drawn on acceptance
    Celebrating { burst: ConfettiBurst },
}

/// Everything a user interaction can do to the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    Accept,
    /// Pointer entered or clicked the decline control
    DeclineEngage,
    /// Pointer left the decline control
    DeclineDisengage,
    Reset,
    PointerMoved(Point),
}

/// Parameters the transitions draw on.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTuning {
    pub evasion_range: f64,
    pub confetti: ConfettiSpec,
}

impl Default for CardTuning {
    fn default() -> Self {
        Self {
            evasion_range: DEFAULT_EVASION_RANGE,
            confetti: ConfettiSpec::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardState {
    pub phase: CardPhase,
    /// Last pointer position seen
    pub cursor: Point,
    /// Current displacement of the decline control
    pub evasion: Offset,
    /// Acceptances so far, used to tag confetti bursts
    bursts: u64,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the question has been answered.
    pub fn answered(&self) -> bool {
        matches!(self.phase, CardPhase::Celebrating { .. })
    }

    /// True when the answer was yes. Implies [`answered`](Self::answered).
    pub fn accepted(&self) -> bool {
        matches!(self.phase, CardPhase::Celebrating { .. })
    }

    /// The confetti burst to render, if any.
    pub fn burst(&self) -> Option<&ConfettiBurst> {
        match &self.phase {
            CardPhase::Celebrating { burst } => Some(burst),
            CardPhase::Asking => None,
        }
    }

    /// Apply one event.
    pub fn apply(
        self,
        event: CardEvent,
        rng: &mut impl RandomSource,
        tuning: &CardTuning,
    ) -> Self {
        match event {
            CardEvent::Accept => self.accept(rng, tuning),
            CardEvent::DeclineEngage => self.decline_engage(rng, tuning),
            CardEvent::DeclineDisengage => self.decline_disengage(),
            CardEvent::Reset => self.reset(),
            CardEvent::PointerMoved(point) => self.pointer_moved(point),
        }
    }

    /// Move to `Celebrating` and draw a confetti burst. A no-op when already celebrating.
    pub fn accept(mut self, rng: &mut impl RandomSource, tuning: &CardTuning) -> Self {
        if self.accepted() {
            tracing::debug!("Accept ignored, already celebrating");
            return self;
        }
        self.bursts += 1;
        let burst = ConfettiBurst::generate(self.bursts, rng, &tuning.confetti);
        tracing::debug!(burst = self.bursts, "Proposal accepted");
        self.phase = CardPhase::Celebrating { burst };
        self
    }

    /// Displace the decline control by two independent draws in `[-range, range]`.
    pub fn decline_engage(mut self, rng: &mut impl RandomSource, tuning: &CardTuning) -> Self {
        let range = tuning.evasion_range.abs();
        let x = rng.uniform(-range, range);
        let y = rng.uniform(-range, range);
        self.evasion = Offset::new(x, y).clamped(range);
        tracing::debug!(x = self.evasion.x, y = self.evasion.y, "Decline control evaded");
        self
    }

    /// Return the decline control to its resting position.
    pub fn decline_disengage(mut self) -> Self {
        self.evasion = Offset::ZERO;
        self
    }

    /// Back to the question. Cursor and evasion stay where they are.
    pub fn reset(mut self) -> Self {
        if self.answered() {
            tracing::debug!("Asking again");
        }
        self.phase = CardPhase::Asking;
        self
    }

    pub fn pointer_moved(mut self, point: Point) -> Self {
        self.cursor = point;
        self
    }
}
