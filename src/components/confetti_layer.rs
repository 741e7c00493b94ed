//! Confetti particles for one burst.

use dioxus::prelude::*;
use valentine_core::ConfettiBurst;

#[component]
pub fn ConfettiLayer(burst: ConfettiBurst) -> Element {
    let keyframes = burst.keyframes_css();

    rsx! {
        style { {keyframes} }
        div { class: "confetti-layer", "aria-hidden": "true",
            for particle in burst.particles.iter() {
                span {
                    key: "{burst.id}-{particle.index}",
                    class: "confetti",
                    style: particle.motion().animation_css(&burst.animation_name(particle)),
                    "{particle.glyph}"
                }
            }
        }
    }
}
