use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::domain::site::{
    BUTTON_OPEN_CLASS, MOBILE_BUTTON_SELECTOR, NAV_LINKS_SELECTOR, NAV_LINK_ANCHORS_SELECTOR,
    NAV_OPEN_CLASS,
};

use super::listeners::Listeners;

/// Hamburger toggle; any link inside the menu closes it.
pub(super) fn install(document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let (Some(button), Some(links)) = (
        document.query_selector(MOBILE_BUTTON_SELECTOR)?,
        document.query_selector(NAV_LINKS_SELECTOR)?,
    ) else {
        log::debug!("mobile navigation not found, toggle skipped");
        return Ok(());
    };

    {
        let button_el = button.clone();
        let links = links.clone();
        listeners.listen(&button, "click", move |_| {
            let _ = links.class_list().toggle(NAV_OPEN_CLASS);
            let _ = button_el.class_list().toggle(BUTTON_OPEN_CLASS);
        })?;
    }

    let anchors = document.query_selector_all(NAV_LINK_ANCHORS_SELECTOR)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let links = links.clone();
        let button = button.clone();
        listeners.listen(&anchor, "click", move |_| {
            let _ = links.class_list().remove_1(NAV_OPEN_CLASS);
            let _ = button.class_list().remove_1(BUTTON_OPEN_CLASS);
        })?;
    }
    Ok(())
}
