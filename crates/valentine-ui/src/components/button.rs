//! Button Components
//!
//! One button per role on the card:
//! - Accept: springs up on hover, squashes on tap
//! - Decline: no gesture, moved by the evasion offset instead
//! - Reset: gentle hover and tap response

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Accept,
    Decline,
    Reset,
}

impl ButtonVariant {
    /// Returns the CSS classes for this variant
    ///
    /// The `btn-accept` and `btn-reset` classes carry the gesture rules
    /// emitted by `presets::stylesheet()`.
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Accept => "btn btn-accept",
            ButtonVariant::Decline => "btn btn-decline",
            ButtonVariant::Reset => "btn btn-reset",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, emoji)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Pointer entered the button
    #[props(default)]
    pub onmouseenter: Option<EventHandler<()>>,
    /// Pointer left the button
    #[props(default)]
    pub onmouseleave: Option<EventHandler<()>>,
    /// Inline style, e.g. an evasion transform
    #[props(default)]
    pub style: Option<String>,
}

/// Styled button for the card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Accept,
///         onclick: move |_| accept(),
///         "Yes! 💕"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.class();
    let style = props.style.clone().unwrap_or_default();
    let onclick = props.onclick;
    let onmouseenter = props.onmouseenter;
    let onmouseleave = props.onmouseleave;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            style: "{style}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            onmouseenter: move |_| {
                if let Some(handler) = &onmouseenter {
                    handler.call(());
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = &onmouseleave {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Accept.class(), "btn btn-accept");
        assert_eq!(ButtonVariant::Decline.class(), "btn btn-decline");
        assert_eq!(ButtonVariant::Reset.class(), "btn btn-reset");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Accept);
    }
}
