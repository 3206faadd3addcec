use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomTokenList, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::domain::site::{
    classes_on_reveal, is_staggered, stagger_delay_css, uses_generic_fade, FADE_CLASS,
    REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer that reveals each element once, the first time it scrolls into view
pub(super) struct RevealObserver {
    observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        // Stop delivering entries before the callback is freed
        self.observer.disconnect();
    }
}

pub(super) fn install(document: &Document) -> Result<Option<RevealObserver>, JsValue> {
    let elements = document.query_selector_all(REVEAL_SELECTOR)?;
    if elements.length() == 0 {
        log::debug!("nothing to reveal, observer skipped");
        return Ok(None);
    }

    let callback: RevealCallback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target);
                // Only animate once
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    let handle = RevealObserver {
        observer,
        _callback: callback,
    };

    for i in 0..elements.length() {
        let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        prepare(&el)?;
        handle.observer.observe(&el);
    }

    Ok(Some(handle))
}

fn class_tokens(list: &DomTokenList) -> Vec<String> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Hide the element until revealed; stagger card grids by sibling position.
fn prepare(el: &Element) -> Result<(), JsValue> {
    let list = el.class_list();
    let tokens = class_tokens(&list);
    let classes: Vec<&str> = tokens.iter().map(String::as_str).collect();

    if uses_generic_fade(&classes) {
        list.add_1(FADE_CLASS)?;
    } else {
        list.remove_1(FADE_CLASS)?;
    }
    if is_staggered(&classes) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("transition-delay", &stagger_delay_css(sibling_index(el)))?;
        }
    }
    Ok(())
}

fn reveal(el: &Element) {
    let list = el.class_list();
    let tokens = class_tokens(&list);
    let classes: Vec<&str> = tokens.iter().map(String::as_str).collect();
    for class in classes_on_reveal(&classes) {
        let _ = list.add_1(class);
    }
}

fn sibling_index(el: &Element) -> usize {
    let Some(parent) = el.parent_element() else {
        return 0;
    };
    let children = parent.children();
    (0..children.length())
        .find(|&i| children.item(i).as_ref() == Some(el))
        .map(|i| i as usize)
        .unwrap_or(0)
}
