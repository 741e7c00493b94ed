//! Success panel shown after acceptance.

use dioxus::prelude::*;
use valentine_core::animation::presets::{
    self, CELEBRATION_FADE, CELEBRATION_IMAGE, SUCCESS_DELAYS, SUCCESS_STEP,
};
use valentine_core::{CardConfig, CardEvent};
use valentine_ui::{Button, ButtonVariant};

use super::ConfettiLayer;
use crate::context::{use_card, use_card_config};

const CELEBRATION: Asset = asset!("/assets/celebration.gif");

/// Celebration image source: the configured override, else the bundled asset.
pub fn celebration_src(config: &CardConfig) -> String {
    config
        .image
        .clone()
        .unwrap_or_else(|| CELEBRATION.to_string())
}

/// Reveal style for success step `step` (panel, title, message, reset).
pub fn step_style(step: usize) -> String {
    let delay = SUCCESS_DELAYS[step.min(SUCCESS_DELAYS.len() - 1)];
    presets::success_step(delay).animation_css(SUCCESS_STEP)
}

#[component]
pub fn CelebrationView() -> Element {
    let config = use_card_config();
    let card = use_card();
    let burst = use_memo(move || card.state().read().burst().cloned());
    let image_src = celebration_src(&config);

    rsx! {
        div {
            class: "celebration-container",
            style: presets::celebration_fade().animation_css(CELEBRATION_FADE),

            {burst().map(|burst| rsx! { ConfettiLayer { burst } })}

            div { class: "success-message", style: step_style(0),
                img {
                    class: "celebration-gif",
                    src: "{image_src}",
                    alt: "celebration",
                    style: presets::celebration_image().animation_css(CELEBRATION_IMAGE),
                    onerror: move |_| tracing::warn!("Celebration image failed to load"),
                }

                h1 { style: step_style(1), "{config.success_title}" }

                p { style: step_style(2), "{config.success_message}" }

                div { class: "reset-wrap", style: step_style(3),
                    Button {
                        variant: ButtonVariant::Reset,
                        onclick: move |_| card.dispatch(CardEvent::Reset),
                        "{config.reset_label}"
                    }
                }
            }
        }
    }
}
