//! Reusable UI components for the card.

mod button;
mod staggered_text;

pub use button::*;
pub use staggered_text::*;
