//! Viewport coordinates.

use serde::{Deserialize, Serialize};

/// A position in viewport pixels, as delivered by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`.
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A displacement from an element's resting position, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// No displacement.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both components into `[-range, range]`.
    pub fn clamped(self, range: f64) -> Self {
        let range = range.abs();
        Self::new(self.x.clamp(-range, range), self.y.clamp(-range, range))
    }

    /// True when both components lie in `[-range, range]`.
    pub fn within(&self, range: f64) -> bool {
        self.x.abs() <= range && self.y.abs() <= range
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// CSS `translate(...)` for this offset.
    pub fn translate_css(&self) -> String {
        format!("translate({}px, {}px)", fmt_num(self.x), fmt_num(self.y))
    }
}

/// Format a number for CSS output: at most three decimals, no trailing zeros.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_both_axes() {
        let offset = Offset::new(250.0, -130.5).clamped(100.0);
        assert_eq!(offset, Offset::new(100.0, -100.0));
        assert!(offset.within(100.0));
    }

    #[test]
    fn zero_offset_translate() {
        assert!(Offset::ZERO.is_zero());
        assert_eq!(Offset::ZERO.translate_css(), "translate(0px, 0px)");
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-12.34567), "-12.346");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn point_offset_by() {
        assert_eq!(Point::new(40.0, 60.0).offset_by(-20.0, -20.0), Point::new(20.0, 40.0));
    }
}
