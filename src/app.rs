use dioxus::prelude::*;
use valentine_core::animation::presets;

use crate::components::ProposalCard;
use crate::context::{get_card_config, get_random_seed, use_card_provider};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared motion stylesheet and card context.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_card_config);
    use_card_provider(&config, get_random_seed());

    let motion_sheet = use_hook(presets::stylesheet);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {motion_sheet} }
        ProposalCard {}
    }
}
