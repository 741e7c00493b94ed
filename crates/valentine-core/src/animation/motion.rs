//! A complete animation: keyframes plus timing.

use super::keyframes::Keyframes;
use super::pose::Pose;
use super::transition::Transition;

#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub keyframes: Keyframes,
    pub transition: Transition,
}

impl Motion {
    pub fn new(keyframes: Keyframes, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    /// Motion from one pose to another.
    pub fn between(from: Pose, to: Pose, transition: Transition) -> Self {
        Self::new(Keyframes::between(&from, &to), transition)
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.transition = self.transition.with_delay(delay);
        self
    }

    /// Pose shown before the motion starts.
    pub fn initial(&self) -> Pose {
        self.keyframes.first()
    }

    /// Pose held once the motion ends.
    pub fn settled(&self) -> Pose {
        self.keyframes.last()
    }

    /// The `@keyframes` rule for this motion.
    pub fn keyframes_css(&self, name: &str) -> String {
        self.keyframes.css(name)
    }

    /// Inline `animation` declaration playing keyframes `name`.
    pub fn animation_css(&self, name: &str) -> String {
        format!("animation: {};", self.transition.animation_css(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;

    #[test]
    fn delay_carries_into_declaration() {
        let motion = Motion::between(
            Pose::new().opacity(0.0),
            Pose::new().opacity(1.0),
            Transition::tween(0.3, Easing::EaseOut),
        )
        .with_delay(0.5);
        assert_eq!(motion.animation_css("fade"), "animation: fade 0.3s ease-out 0.5s 1 both;");
        assert_eq!(motion.initial().opacity, Some(0.0));
        assert_eq!(motion.settled().opacity, Some(1.0));
    }
}
