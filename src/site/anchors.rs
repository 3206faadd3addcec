use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::domain::site::ANCHOR_SELECTOR;

use super::listeners::Listeners;

/// Smooth-scroll in-page anchor links to their targets.
pub(super) fn install(document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(ANCHOR_SELECTOR)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let link = anchor.clone();
        listeners.listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; nothing to scroll to
            if let Ok(Some(target)) = doc.query_selector(&href) {
                scroll_to(&target);
            }
        })?;
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
