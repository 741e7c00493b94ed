//! Hover and tap responses rendered as CSS pseudo-class rules.

use super::pose::Pose;
use super::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Pose while the pointer is over the element
    pub hover: Pose,
    /// Pose while the element is pressed
    pub tap: Pose,
    pub transition: Transition,
}

impl Gesture {
    pub const fn new(hover: Pose, tap: Pose, transition: Transition) -> Self {
        Self {
            hover,
            tap,
            transition,
        }
    }

    /// CSS rules applying this gesture to `selector`.
    pub fn css(&self, selector: &str) -> String {
        format!(
            "{sel} {{ transition: {}; }} {sel}:hover {{ {} }} {sel}:active {{ {} }}",
            self.transition.transition_css("transform"),
            self.hover.css(),
            self.tap.css(),
            sel = selector
        )
    }
}
