//! Window pointer tracking.
//!
//! Installs a `mousemove` listener on the webview window when the card
//! mounts and streams positions back as [`CardEvent::PointerMoved`]. The
//! listener is removed when the card unmounts. Without pointer events the
//! follower just stays at its default position.

use dioxus::prelude::*;
use valentine_core::{CardEvent, Point};

use crate::context::CardHandle;

const SUBSCRIBE_JS: &str = r#"
window.__valentinePointer = (e) => dioxus.send([e.clientX, e.clientY]);
window.addEventListener('mousemove', window.__valentinePointer);
await new Promise(() => {});
"#;

const UNSUBSCRIBE_JS: &str = r#"
if (window.__valentinePointer) {
    window.removeEventListener('mousemove', window.__valentinePointer);
    delete window.__valentinePointer;
}
"#;

/// Subscribe `card` to pointer moves for the lifetime of the calling component.
pub fn use_pointer_stream(card: CardHandle) {
    use_future(move || async move {
        let mut listener = document::eval(SUBSCRIBE_JS);
        tracing::debug!("Pointer listener installed");
        loop {
            match listener.recv::<(f64, f64)>().await {
                Ok((x, y)) => card.dispatch(CardEvent::PointerMoved(Point::new(x, y))),
                Err(e) => {
                    tracing::warn!("Pointer stream closed: {:?}", e);
                    break;
                }
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(UNSUBSCRIBE_JS);
        tracing::debug!("Pointer listener removed");
    });
}
