//! The proposal card: question until accepted, celebration after.

use dioxus::prelude::*;

use super::celebration_view::celebration_src;
use super::{CelebrationView, FloatingBackdrop, FollowingHeart, QuestionView};
use crate::context::{use_card, use_card_config};
use crate::pointer::use_pointer_stream;

/// Full-viewport card. Owns the pointer subscription for as long as it is mounted.
///
/// The celebration image is preloaded here, while the question is still showing.
#[component]
pub fn ProposalCard() -> Element {
    let config = use_card_config();
    let card = use_card();
    use_pointer_stream(card);

    // Pointer moves change the state on every frame; only the phase matters here.
    let answered = use_memo(move || card.state().read().answered());
    let answered = answered();
    let image_src = celebration_src(&config);

    rsx! {
        document::Link { rel: "preload", href: image_src, r#as: "image" }

        div { class: "valentine-container",
            if !answered {
                FollowingHeart {}
            }

            FloatingBackdrop {}

            if answered {
                CelebrationView {}
            } else {
                QuestionView {}
            }
        }
    }
}
