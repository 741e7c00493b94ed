//! Sequential reveal delays for groups of elements.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Delay before the first child, in seconds
    pub delay_children: f64,
    /// Extra delay per child index, in seconds
    pub stagger_children: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
        }
    }

    /// Delay for the child at `index`.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_increase_by_fixed_step() {
        let stagger = Stagger::new(0.3, 0.2);
        assert_eq!(stagger.delay_for(0), 0.3);
        assert!((stagger.delay_for(3) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn no_base_delay() {
        let stagger = Stagger::new(0.0, 0.08);
        assert!((stagger.delay_for(10) - 0.8).abs() < 1e-9);
    }
}
