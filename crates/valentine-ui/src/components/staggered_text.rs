//! Staggered Text Reveal
//!
//! Renders text one character per `span`, each bouncing in after the one
//! before it.

use dioxus::prelude::*;
use valentine_core::animation::presets::{self, TITLE_CHAR};
use valentine_core::title;

/// Inline style playing the title bounce after `delay` seconds.
pub fn char_style(delay: f64) -> String {
    format!(
        "display: inline-block; {}",
        presets::title_char().with_delay(delay).animation_css(TITLE_CHAR)
    )
}

#[component]
pub fn StaggeredText(text: String) -> Element {
    let chars = title::reveal(&text);

    rsx! {
        for c in chars {
            span {
                key: "{c.index}",
                class: "title-char",
                style: char_style(c.delay),
                "{c.glyph}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_style_carries_delay() {
        let style = char_style(0.4);
        assert!(style.starts_with("display: inline-block; animation: title-char "));
        assert!(style.contains(" 0.4s 1 both;"));
    }
}
