//! Keyframe tracks and their CSS rendering.
//!
//! Each [`Track`] holds values for one property, spaced evenly across the
//! animation like a keyframe array (`[0, -20, 0]` puts its stops at 0%, 50%
//! and 100%). Tracks may have different lengths. Rendering merges them onto
//! the union of their stop offsets; a track without a stop at some offset
//! contributes its linearly interpolated value there.

use super::pose::{Pose, Property};
use crate::geometry::fmt_num;

const OFFSET_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub property: Property,
    pub values: Vec<f64>,
}

impl Track {
    /// Stop offsets in `[0, 1]`. A single value is held across the whole run.
    pub fn offsets(&self) -> Vec<f64> {
        match self.values.len() {
            0 => Vec::new(),
            1 => vec![0.0, 1.0],
            n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        }
    }

    /// Value at `offset`, linearly interpolated between neighbouring stops.
    pub fn sample(&self, offset: f64) -> f64 {
        let n = self.values.len();
        match n {
            0 => self.property.resting(),
            1 => self.values[0],
            _ => {
                let position = offset.clamp(0.0, 1.0) * (n - 1) as f64;
                let lower = (position.floor() as usize).min(n - 2);
                let fraction = position - lower as f64;
                let a = self.values[lower];
                let b = self.values[lower + 1];
                a + (b - a) * fraction
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keyframes {
    tracks: Vec<Track>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the track for `property`. Empty value lists are ignored.
    pub fn track(mut self, property: Property, values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        if values.is_empty() {
            return self;
        }
        self.tracks.retain(|t| t.property != property);
        self.tracks.push(Track { property, values });
        self
    }

    /// Two-stop keyframes from `from` to `to`.
    ///
    /// A property set on only one side uses its resting value on the other.
    pub fn between(from: &Pose, to: &Pose) -> Self {
        Property::ALL
            .iter()
            .filter(|p| from.get(**p).is_some() || to.get(**p).is_some())
            .fold(Self::new(), |frames, p| {
                frames.track(*p, vec![from.resolved(*p), to.resolved(*p)])
            })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Sorted union of every track's stop offsets.
    pub fn stops(&self) -> Vec<f64> {
        let mut stops: Vec<f64> = self.tracks.iter().flat_map(Track::offsets).collect();
        stops.sort_by(f64::total_cmp);
        stops.dedup_by(|a, b| (*a - *b).abs() < OFFSET_EPSILON);
        stops
    }

    /// The pose every track produces at `offset`.
    pub fn pose_at(&self, offset: f64) -> Pose {
        let mut pose = Pose::new();
        for track in &self.tracks {
            pose.set(track.property, track.sample(offset));
        }
        pose
    }

    pub fn first(&self) -> Pose {
        self.pose_at(0.0)
    }

    pub fn last(&self) -> Pose {
        self.pose_at(1.0)
    }

    /// Render as a CSS `@keyframes` rule called `name`.
    pub fn css(&self, name: &str) -> String {
        let body: Vec<String> = self
            .stops()
            .into_iter()
            .map(|offset| format!("{}% {{ {} }}", fmt_num(offset * 100.0), self.pose_at(offset).css()))
            .collect();
        format!("@keyframes {} {{ {} }}", name, body.join(" "))
    }
}
