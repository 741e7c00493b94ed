//! The question, its staggered title and the two buttons.

use dioxus::prelude::*;
use valentine_core::animation::presets::{self, CONTAINER_STAGGER, ENVELOPE_PULSE, ITEM_REVEAL};
use valentine_core::{CardEvent, Offset};
use valentine_ui::{Button, ButtonVariant, StaggeredText};

use crate::context::{use_card, use_card_config};

/// Reveal style for the `index`th child of the question container.
pub fn item_style(index: usize) -> String {
    presets::item_reveal()
        .with_delay(CONTAINER_STAGGER.delay_for(index))
        .animation_css(ITEM_REVEAL)
}

/// Position of the decline control, displaced by `evasion`.
pub fn decline_style(evasion: Offset) -> String {
    format!(
        "transform: {}; transition: {};",
        evasion.translate_css(),
        presets::evasion().transition_css("transform")
    )
}

#[component]
pub fn QuestionView() -> Element {
    let config = use_card_config();
    let card = use_card();
    let evasion = use_memo(move || card.state().read().evasion);
    let evasion = evasion();

    rsx! {
        div { class: "question-container",
            div { class: "emoji-container", style: item_style(0),
                span {
                    class: "emoji",
                    style: presets::envelope_pulse().animation_css(ENVELOPE_PULSE),
                    "{config.envelope}"
                }
            }

            h1 { class: "question", style: item_style(1),
                StaggeredText { text: config.question.clone() }
            }

            p { class: "subtitle", style: item_style(2), "{config.subtitle}" }

            div { class: "buttons-container", style: item_style(3),
                Button {
                    variant: ButtonVariant::Accept,
                    onclick: move |_| card.dispatch(CardEvent::Accept),
                    "{config.accept_label}"
                }

                Button {
                    variant: ButtonVariant::Decline,
                    style: decline_style(evasion),
                    onmouseenter: move |_| card.dispatch(CardEvent::DeclineEngage),
                    onmouseleave: move |_| card.dispatch(CardEvent::DeclineDisengage),
                    onclick: move |_| card.dispatch(CardEvent::DeclineEngage),
                    "{config.decline_label}"
                }
            }
        }
    }
}
