//! Spring physics for hover, tap and follow motions.
//!
//! A spring is a damped harmonic oscillator released from rest at 0 and
//! pulled towards 1. CSS has no spring timing, so [`Spring::css_easing`]
//! samples the oscillator into a `linear(...)` easing that runs for
//! [`Spring::settle_time`] seconds. Underdamped springs overshoot past 1,
//! which `linear()` reproduces.

use crate::geometry::fmt_num;

/// Residual amplitude at which a spring counts as settled.
const SETTLE_THRESHOLD: f64 = 0.001;

/// Upper bound on settle time for springs with little or no damping.
pub const MAX_SETTLE_SECS: f64 = 10.0;

/// Default number of samples in a rendered easing.
pub const EASING_SAMPLES: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(100.0, 10.0, 1.0)
    }
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Undamped angular frequency, `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio, `c / (2 sqrt(k m))`. Below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_degenerate(&self) -> bool {
        let omega = self.natural_frequency();
        !(omega.is_finite() && omega > 0.0) || self.damping < 0.0
    }

    /// Displacement towards the target after `t` seconds, 0 at rest, 1 at target.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if self.is_degenerate() {
            return 1.0;
        }

        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = (-zeta * omega * t).exp();

        if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            1.0 - decay * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            let s = omega * (zeta * zeta - 1.0).sqrt();
            1.0 - decay * ((s * t).cosh() + (zeta * omega / s) * (s * t).sinh())
        }
    }

    /// Seconds until the oscillation envelope falls below 0.1%.
    pub fn settle_time(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let rate = if zeta > 1.0 {
            // overdamped: the slow pole dominates
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        } else {
            zeta * omega
        };
        if rate <= 0.0 {
            return MAX_SETTLE_SECS;
        }
        (SETTLE_THRESHOLD.recip().ln() / rate).min(MAX_SETTLE_SECS)
    }

    /// Progress sampled at `samples` evenly spaced points across the settle time.
    /// The last sample is pinned to exactly 1.
    pub fn samples(&self, samples: usize) -> Vec<f64> {
        let samples = samples.max(2);
        let settle = self.settle_time();
        let mut points: Vec<f64> = (0..samples)
            .map(|i| self.progress(settle * i as f64 / (samples - 1) as f64))
            .collect();
        if let Some(last) = points.last_mut() {
            *last = 1.0;
        }
        points
    }

    /// CSS `linear(...)` easing that traces this spring.
    pub fn css_easing(&self) -> String {
        let points: Vec<String> = self
            .samples(EASING_SAMPLES)
            .into_iter()
            .map(fmt_num)
            .collect();
        format!("linear({})", points.join(", "))
    }
}
