//! Timing of a motion: tween or spring, delay and repetition.

use super::easing::Easing;
use super::spring::Spring;
use crate::geometry::fmt_num;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    /// Fixed duration in seconds with an easing curve
    Tween { duration: f64, easing: Easing },
    /// Physics driven, duration derived from the spring
    Spring(Spring),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

impl Repeat {
    fn css(&self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub timing: Timing,
    /// Seconds before the motion starts
    pub delay: f64,
    pub repeat: Repeat,
}

impl Transition {
    pub const fn tween(duration: f64, easing: Easing) -> Self {
        Self {
            timing: Timing::Tween { duration, easing },
            delay: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub const fn spring(spring: Spring) -> Self {
        Self {
            timing: Timing::Spring(spring),
            delay: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Duration of one iteration in seconds.
    pub fn duration(&self) -> f64 {
        match self.timing {
            Timing::Tween { duration, .. } => duration,
            Timing::Spring(spring) => spring.settle_time(),
        }
    }

    /// Time until a single iteration finishes, delay included.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration()
    }

    pub fn timing_function(&self) -> String {
        match self.timing {
            Timing::Tween { easing, .. } => easing.css(),
            Timing::Spring(spring) => spring.css_easing(),
        }
    }

    /// Value for the CSS `animation` shorthand, playing keyframes `name`.
    ///
    /// Fill mode is `both` so the first frame holds during the delay and
    /// the last frame holds after the end.
    pub fn animation_css(&self, name: &str) -> String {
        format!(
            "{} {}s {} {}s {} both",
            name,
            fmt_num(self.duration()),
            self.timing_function(),
            fmt_num(self.delay),
            self.repeat.css()
        )
    }

    /// Value for the CSS `transition` shorthand on `property`.
    pub fn transition_css(&self, property: &str) -> String {
        format!(
            "{} {}s {} {}s",
            property,
            fmt_num(self.duration()),
            self.timing_function(),
            fmt_num(self.delay)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_animation_shorthand() {
        let transition = Transition::tween(0.8, Easing::EaseOut).with_delay(0.3);
        assert_eq!(
            transition.animation_css("item-reveal"),
            "item-reveal 0.8s ease-out 0.3s 1 both"
        );
        assert!((transition.end_time() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn forever_repeats_infinitely() {
        let transition = Transition::tween(3.0, Easing::EaseInOut).forever();
        assert_eq!(
            transition.animation_css("float"),
            "float 3s ease-in-out 0s infinite both"
        );
    }

    #[test]
    fn negative_delay_clamped() {
        let transition = Transition::tween(1.0, Easing::Linear).with_delay(-2.0);
        assert_eq!(transition.delay, 0.0);
    }

    #[test]
    fn spring_duration_comes_from_settle_time() {
        let spring = Spring::new(400.0, 10.0, 1.0);
        let transition = Transition::spring(spring);
        assert_eq!(transition.duration(), spring.settle_time());
        assert!(transition.transition_css("transform").starts_with("transform "));
        assert!(transition.timing_function().starts_with("linear("));
    }
}
