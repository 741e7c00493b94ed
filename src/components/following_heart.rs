//! Heart that chases the cursor while the question is open.

use dioxus::prelude::*;
use valentine_core::animation::presets::{self, FOLLOWER_ANCHOR};
use valentine_core::{Offset, Point};

use crate::context::{use_card, use_card_config};

/// Inline style placing the follower on `cursor`, springing towards it.
pub fn follower_style(cursor: Point) -> String {
    let target = cursor.offset_by(-FOLLOWER_ANCHOR, -FOLLOWER_ANCHOR);
    format!(
        "transform: {}; transition: {};",
        Offset::new(target.x, target.y).translate_css(),
        presets::follower().transition_css("transform")
    )
}

#[component]
pub fn FollowingHeart() -> Element {
    let config = use_card_config();
    let cursor = use_card().state().read().cursor;

    rsx! {
        div {
            class: "following-heart",
            "aria-hidden": "true",
            style: follower_style(cursor),
            "{config.follower}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_is_centred_on_cursor() {
        let style = follower_style(Point::new(120.0, 80.0));
        assert!(style.starts_with("transform: translate(100px, 60px);"));
        assert!(style.contains("transition: transform "));
    }
}
