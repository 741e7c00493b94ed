//! Ambient hearts and roses floating behind the card.

use serde::{Deserialize, Serialize};

use crate::animation::presets::CONTAINER_STAGGER;
use crate::random::RandomSource;

pub const HEART_GLYPHS: [&str; 2] = ["❤️", "🤍"];
pub const ROSE_GLYPH: &str = "🌹";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropSpec {
    pub hearts: usize,
    pub roses: usize,
}

impl Default for BackdropSpec {
    fn default() -> Self {
        Self {
            hearts: 12,
            roses: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingGlyph {
    pub index: usize,
    pub glyph: &'static str,
    /// Horizontal position, percent of viewport width
    pub left_pct: f64,
    /// Vertical position, percent of viewport height
    pub top_pct: f64,
    /// Start delay for the float loop, in seconds
    pub delay: f64,
}

/// Place every backdrop glyph at a random position. Hearts come first.
pub fn scatter(rng: &mut impl RandomSource, spec: &BackdropSpec) -> Vec<FloatingGlyph> {
    let hearts = (0..spec.hearts).map(|i| HEART_GLYPHS[i % HEART_GLYPHS.len()]);
    let roses = std::iter::repeat(ROSE_GLYPH).take(spec.roses);
    hearts
        .chain(roses)
        .enumerate()
        .map(|(index, glyph)| FloatingGlyph {
            index,
            glyph,
            left_pct: rng.uniform(0.0, 100.0),
            top_pct: rng.uniform(0.0, 100.0),
            delay: CONTAINER_STAGGER.delay_for(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSequence;

    #[test]
    fn default_scatter_counts() {
        let mut rng = FixedSequence::new(vec![0.1, 0.9]);
        let glyphs = scatter(&mut rng, &BackdropSpec::default());
        assert_eq!(glyphs.len(), 20);
        assert_eq!(glyphs.iter().filter(|g| g.glyph == ROSE_GLYPH).count(), 8);
        assert_eq!(glyphs[0].glyph, "❤️");
        assert_eq!(glyphs[1].glyph, "🤍");
        assert!((glyphs[0].left_pct - 10.0).abs() < 1e-9);
        assert!((glyphs[0].top_pct - 90.0).abs() < 1e-9);
    }

    #[test]
    fn empty_backdrop() {
        let mut rng = FixedSequence::new(vec![0.5]);
        let spec = BackdropSpec { hearts: 0, roses: 0 };
        assert!(scatter(&mut rng, &spec).is_empty());
    }
}
