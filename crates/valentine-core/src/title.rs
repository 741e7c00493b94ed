//! Character-by-character title reveal.

use crate::animation::presets::TITLE_STAGGER;

const NO_BREAK_SPACE: char = '\u{00A0}';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealedChar {
    pub index: usize,
    pub glyph: char,
    /// Bounce delay in seconds
    pub delay: f64,
}

/// Split `text` into staggered characters.
///
/// Spaces become no-break spaces so they keep their width when each
/// character renders as its own inline block.
pub fn reveal(text: &str) -> Vec<RevealedChar> {
    text.chars()
        .enumerate()
        .map(|(index, c)| RevealedChar {
            index,
            glyph: if c == ' ' { NO_BREAK_SPACE } else { c },
            delay: TITLE_STAGGER.delay_for(index),
        })
        .collect()
}
