//! Hearts and roses drifting behind the card.

use dioxus::prelude::*;
use valentine_core::animation::presets::{self, CELEBRATION_FADE, FLOATING_GLYPH};
use valentine_core::backdrop::{self, FloatingGlyph, ROSE_GLYPH};

use crate::context::{use_card, use_card_config};

fn glyph_class(glyph: &FloatingGlyph) -> &'static str {
    if glyph.glyph == ROSE_GLYPH {
        "rose-float"
    } else {
        "heart-float"
    }
}

fn glyph_style(glyph: &FloatingGlyph) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; {}",
        glyph.left_pct,
        glyph.top_pct,
        presets::floating_glyph()
            .with_delay(glyph.delay)
            .animation_css(FLOATING_GLYPH)
    )
}

/// Container fade-in, timed to the first floating child.
fn backdrop_style() -> String {
    presets::backdrop_fade().animation_css(CELEBRATION_FADE)
}

/// Scattered once per mount; positions stay put across re-renders.
#[component]
pub fn FloatingBackdrop() -> Element {
    let config = use_card_config();
    let card = use_card();
    let glyphs = use_hook(|| card.with_rng(|rng| backdrop::scatter(rng, &config.backdrop)));

    rsx! {
        div {
            class: "hearts-background",
            "aria-hidden": "true",
            style: backdrop_style(),
            for glyph in glyphs.iter() {
                div {
                    key: "{glyph.index}",
                    class: glyph_class(glyph),
                    style: glyph_style(glyph),
                    "{glyph.glyph}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_container_fades_in() {
        assert_eq!(
            backdrop_style(),
            "animation: celebration-fade 0.3s ease-out 0.3s 1 both;"
        );
    }

    #[test]
    fn glyph_style_positions_and_animates() {
        let glyph = FloatingGlyph {
            index: 2,
            glyph: "❤️",
            left_pct: 12.5,
            top_pct: 50.0,
            delay: 0.7,
        };
        let style = glyph_style(&glyph);
        assert!(style.starts_with("left: 12.50%; top: 50.00%; animation: floating-glyph 3s"));
        assert!(style.contains(" 0.7s infinite both;"));
        assert_eq!(glyph_class(&glyph), "heart-float");
    }
}
