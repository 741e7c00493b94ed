//! Animation descriptors as data.
//!
//! Nothing here talks to a rendering framework. Motions are plain values
//! (poses, keyframe tracks, timing) with CSS renderers the UI layer feeds to
//! the webview. The state machine never touches this module; the UI maps
//! state to motions.

mod easing;
mod gesture;
mod keyframes;
mod motion;
mod pose;
pub mod presets;
mod spring;
mod stagger;
mod transition;

pub use easing::Easing;
pub use gesture::Gesture;
pub use keyframes::{Keyframes, Track};
pub use motion::Motion;
pub use pose::{Pose, Property};
pub use spring::{Spring, EASING_SAMPLES, MAX_SETTLE_SECS};
pub use stagger::Stagger;
pub use transition::{Repeat, Timing, Transition};
