//! Visual transform parameters for one frame.

use crate::geometry::fmt_num;

/// An animatable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
    /// Degrees
    Rotate,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Opacity,
        Property::X,
        Property::Y,
        Property::Scale,
        Property::Rotate,
    ];

    /// Value of the property when nothing animates it.
    pub fn resting(&self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::X | Property::Y | Property::Rotate => 0.0,
        }
    }

    fn is_transform(&self) -> bool {
        !matches!(self, Property::Opacity)
    }
}

/// A set of property values. Unset properties are left to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub rotate: Option<f64>,
}

impl Pose {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
            rotate: None,
        }
    }

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn rotate(mut self, value: f64) -> Self {
        self.rotate = Some(value);
        self
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Rotate => self.rotate,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Scale => &mut self.scale,
            Property::Rotate => &mut self.rotate,
        };
        *slot = Some(value);
    }

    /// Value of `property`, falling back to its resting value.
    pub fn resolved(&self, property: Property) -> f64 {
        self.get(property).unwrap_or_else(|| property.resting())
    }

    /// CSS transform for this pose, if any transform property is set.
    ///
    /// All four functions are always emitted in the same order so that
    /// CSS can interpolate between any two poses.
    pub fn transform_css(&self) -> Option<String> {
        if !Property::ALL
            .iter()
            .any(|p| p.is_transform() && self.get(*p).is_some())
        {
            return None;
        }
        Some(format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            fmt_num(self.resolved(Property::X)),
            fmt_num(self.resolved(Property::Y)),
            fmt_num(self.resolved(Property::Scale)),
            fmt_num(self.resolved(Property::Rotate)),
        ))
    }

    /// CSS declarations for this pose, e.g. `opacity: 0; transform: ...;`
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            out.push_str(&format!("opacity: {};", fmt_num(opacity)));
        }
        if let Some(transform) = self.transform_css() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("transform: {};", transform));
        }
        out
    }
}
