//! Confetti burst shown on acceptance.
//!
//! Trajectories are drawn once when the burst is generated and never
//! recomputed while it plays.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::animation::presets::CONFETTI_STAGGER;
use crate::animation::{Easing, Keyframes, Motion, Property, Transition};
use crate::random::RandomSource;

pub const DEFAULT_CONFETTI_GLYPHS: [&str; 10] =
    ["❤️", "💕", "💖", "✨", "🎉", "💐", "🌹", "🎊", "💝", "🌟"];

pub const DEFAULT_CONFETTI_COUNT: usize = 20;

/// Horizontal radius of the burst ring, in pixels.
const RING_RADIUS: f64 = 150.0;
/// Random horizontal jitter, half-width in pixels.
const JITTER: f64 = 25.0;
/// Final rise of every particle, in pixels.
const FINAL_RISE: f64 = -400.0;

/// How many particles a burst has and what they look like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiSpec {
    pub count: usize,
    pub glyphs: Vec<String>,
}

impl Default for ConfettiSpec {
    fn default() -> Self {
        Self {
            count: DEFAULT_CONFETTI_COUNT,
            glyphs: DEFAULT_CONFETTI_GLYPHS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    pub index: usize,
    pub glyph: String,
    /// Horizontal travel in pixels
    pub drift_x: f64,
    /// Height at the top of the arc in pixels (negative is up)
    pub peak_y: f64,
    /// Total rotation in degrees
    pub spin: f64,
    /// Start delay in seconds
    pub delay: f64,
}

impl ConfettiParticle {
    fn generate(index: usize, count: usize, glyph: String, rng: &mut impl RandomSource) -> Self {
        let peak_y = -300.0 - rng.next_unit() * 100.0;
        let ring = (index as f64 / count.max(1) as f64 * TAU).sin() * RING_RADIUS;
        let drift_x = ring + rng.uniform(-JITTER, JITTER);
        let spin = rng.next_unit() * 720.0;
        Self {
            index,
            glyph,
            drift_x,
            peak_y,
            spin,
            delay: CONFETTI_STAGGER.delay_for(index),
        }
    }

    /// The particle's flight: pop in, arc up, fade out.
    pub fn motion(&self) -> Motion {
        Motion::new(
            Keyframes::new()
                .track(Property::Opacity, vec![1.0, 1.0, 0.0])
                .track(Property::Scale, vec![0.0, 1.0, 0.0])
                .track(Property::Y, vec![0.0, self.peak_y, FINAL_RISE])
                .track(Property::X, vec![0.0, self.drift_x])
                .track(Property::Rotate, vec![0.0, self.spin]),
            Transition::tween(2.5, Easing::EaseOut).with_delay(self.delay),
        )
    }
}

/// One set of particles, tagged with the acceptance that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfettiBurst {
    pub id: u64,
    pub particles: Vec<ConfettiParticle>,
}

impl ConfettiBurst {
    pub fn generate(id: u64, rng: &mut impl RandomSource, spec: &ConfettiSpec) -> Self {
        let particles = if spec.glyphs.is_empty() {
            Vec::new()
        } else {
            (0..spec.count)
                .map(|i| {
                    let glyph = spec.glyphs[i % spec.glyphs.len()].clone();
                    ConfettiParticle::generate(i, spec.count, glyph, rng)
                })
                .collect()
        };
        tracing::debug!(burst = id, particles = particles.len(), "Confetti burst generated");
        Self { id, particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Keyframes name for one particle. Unique per burst so a new burst restarts.
    pub fn animation_name(&self, particle: &ConfettiParticle) -> String {
        format!("confetti-{}-{}", self.id, particle.index)
    }

    /// `@keyframes` rules for every particle in the burst.
    pub fn keyframes_css(&self) -> String {
        self.particles
            .iter()
            .map(|p| p.motion().keyframes_css(&self.animation_name(p)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
