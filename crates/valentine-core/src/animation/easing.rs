//! Tween easing curves.

use crate::geometry::fmt_num;

/// Easing curve for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Custom cubic bezier control points `(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS easing function name
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({}, {}, {}, {})",
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_css_names() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::EaseIn.css(), "ease-in");
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0).css(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }
}
