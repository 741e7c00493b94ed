//! Every motion the proposal card uses.
//!
//! Static motions share one `@keyframes` rule each, emitted once by
//! [`stylesheet`]; elements pick them up by name and set their own delay.
//! Confetti particles carry per-particle keyframes (see
//! [`crate::confetti`]).

use super::{Easing, Gesture, Keyframes, Motion, Pose, Property, Spring, Stagger, Transition};

pub const ITEM_REVEAL: &str = "item-reveal";
pub const FLOATING_GLYPH: &str = "floating-glyph";
pub const ENVELOPE_PULSE: &str = "envelope-pulse";
pub const TITLE_CHAR: &str = "title-char";
pub const SUCCESS_STEP: &str = "success-step";
pub const CELEBRATION_IMAGE: &str = "celebration-image";
pub const CELEBRATION_FADE: &str = "celebration-fade";

/// Reveal order for the question view's children.
pub const CONTAINER_STAGGER: Stagger = Stagger::new(0.3, 0.2);

/// Per-character delay for the title bounce.
pub const TITLE_STAGGER: Stagger = Stagger::new(0.0, 0.08);

/// Per-particle delay for the confetti burst.
pub const CONFETTI_STAGGER: Stagger = Stagger::new(0.0, 0.02);

/// Delays for the success panel, title, message and reset action.
pub const SUCCESS_DELAYS: [f64; 4] = [0.0, 0.5, 0.8, 1.1];

/// Pixels subtracted from the cursor so the follower is centred on it.
pub const FOLLOWER_ANCHOR: f64 = 20.0;

pub const ACCEPT_SPRING: Spring = Spring::new(400.0, 10.0, 1.0);
pub const TITLE_SPRING: Spring = Spring::new(120.0, 8.0, 1.0);
pub const FOLLOWER_SPRING: Spring = Spring::new(150.0, 5.0, 0.5);

pub fn item_reveal() -> Motion {
    Motion::between(
        Pose::new().opacity(0.0).y(20.0),
        Pose::new().opacity(1.0).y(0.0),
        Transition::tween(0.8, Easing::EaseOut),
    )
}

pub fn floating_glyph() -> Motion {
    Motion::new(
        Keyframes::new()
            .track(Property::Y, vec![0.0, -20.0, 0.0])
            .track(Property::Rotate, vec![0.0, 5.0, -5.0, 0.0]),
        Transition::tween(3.0, Easing::EaseInOut).forever(),
    )
}

pub fn envelope_pulse() -> Motion {
    Motion::new(
        Keyframes::new()
            .track(Property::Scale, vec![1.0, 1.2, 1.0])
            .track(Property::Rotate, vec![0.0, 10.0, -10.0, 0.0]),
        Transition::tween(2.5, Easing::EaseInOut).forever(),
    )
}

pub fn title_char() -> Motion {
    Motion::between(
        Pose::new().opacity(0.0).y(50.0),
        Pose::new().opacity(1.0).y(0.0),
        Transition::spring(TITLE_SPRING),
    )
}

pub fn success_step(delay: f64) -> Motion {
    Motion::between(
        Pose::new().opacity(0.0).scale(0.9).y(20.0),
        Pose::new().opacity(1.0).scale(1.0).y(0.0),
        Transition::tween(0.5, Easing::EaseOut),
    )
    .with_delay(delay)
}

pub fn celebration_image() -> Motion {
    Motion::between(
        Pose::new().opacity(0.0).scale(0.8),
        Pose::new().opacity(1.0).scale(1.0),
        Transition::tween(0.5, Easing::EaseOut),
    )
    .with_delay(0.1)
}

pub fn celebration_fade() -> Motion {
    Motion::between(
        Pose::new().opacity(0.0),
        Pose::new().opacity(1.0),
        Transition::tween(0.3, Easing::EaseOut),
    )
}

/// Fade-in of the backdrop container, starting with its first child.
pub fn backdrop_fade() -> Motion {
    celebration_fade().with_delay(CONTAINER_STAGGER.delay_children)
}

pub fn accept_gesture() -> Gesture {
    Gesture::new(
        Pose::new().scale(1.1),
        Pose::new().scale(0.85),
        Transition::spring(ACCEPT_SPRING),
    )
}

pub fn reset_gesture() -> Gesture {
    Gesture::new(
        Pose::new().scale(1.05),
        Pose::new().scale(0.95),
        Transition::spring(Spring::default()),
    )
}

/// How the decline control moves to a new evasion offset.
pub fn evasion() -> Transition {
    Transition::tween(0.1, Easing::EaseOut)
}

/// How the follower chases the cursor.
pub fn follower() -> Transition {
    Transition::spring(FOLLOWER_SPRING)
}

/// All shared keyframes and gesture rules, keyed by the names above.
pub fn stylesheet() -> String {
    let motions = [
        (ITEM_REVEAL, item_reveal()),
        (FLOATING_GLYPH, floating_glyph()),
        (ENVELOPE_PULSE, envelope_pulse()),
        (TITLE_CHAR, title_char()),
        (SUCCESS_STEP, success_step(0.0)),
        (CELEBRATION_IMAGE, celebration_image()),
        (CELEBRATION_FADE, celebration_fade()),
    ];
    let mut rules: Vec<String> = motions
        .iter()
        .map(|(name, motion)| motion.keyframes_css(name))
        .collect();
    rules.push(accept_gesture().css(".btn-accept"));
    rules.push(reset_gesture().css(".btn-reset"));
    rules.join("\n")
}
