//! Site - DOM wiring for the page behaviors
//!
//! `start_site` installs every behavior whose elements exist on the page and
//! returns a [`SiteHandle`] that owns all listeners, timers, the reveal
//! observer and the hero animation. Missing elements skip their behavior.

mod anchors;
mod listeners;
mod nav;
mod reveal;
mod timers;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::domain::site::HERO_CANVAS_ID;
use crate::domain::GridConfig;
use crate::runtime::{start_animation, AnimationHandle};

use listeners::Listeners;
use reveal::RevealObserver;
use timers::Timers;

/// Everything `start_site` installed. Stops on `stop()` or when dropped.
#[wasm_bindgen]
pub struct SiteHandle {
    listeners: Listeners,
    reveal: Option<RevealObserver>,
    timers: Timers,
    animation: Option<AnimationHandle>,
}

#[wasm_bindgen]
impl SiteHandle {
    /// Remove every listener, clear timers, disconnect the observer, stop the animation.
    pub fn stop(&mut self) {
        self.listeners.clear();
        // Disconnects on drop
        self.reveal = None;
        self.timers.clear();
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
        }
    }

    /// Keep everything running for the page's lifetime without holding the handle.
    pub fn detach(self) {
        std::mem::forget(self);
    }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.running())
    }
}

impl Drop for SiteHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Wire up the page. Call once the DOM is ready.
#[wasm_bindgen(js_name = startSite)]
pub fn start_site() -> Result<SiteHandle, JsValue> {
    start_site_with_config(GridConfig::default())
}

/// Same as `startSite`, with a JSON configuration for the hero animation
#[wasm_bindgen(js_name = startSiteWithConfig)]
pub fn start_site_with_config_json(json: String) -> Result<SiteHandle, JsValue> {
    let config = GridConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
    start_site_with_config(config)
}

pub fn start_site_with_config(config: GridConfig) -> Result<SiteHandle, JsValue> {
    let window = window()?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let mut listeners = Listeners::default();
    anchors::install(&document, &mut listeners)?;
    let reveal = reveal::install(&document)?;
    nav::install(&document, &mut listeners)?;

    let mut timers = Timers::new(window.clone());
    timers::install_splash(&document, &mut timers)?;
    timers::install_clock(&document, &mut timers)?;

    let animation = start_hero(&document, config);

    log::info!(
        "site started ({} listeners, reveal {}, hero {})",
        listeners.len(),
        reveal.is_some(),
        animation.is_some()
    );
    Ok(SiteHandle {
        listeners,
        reveal,
        timers,
        animation,
    })
}

/// Start the hero animation. An absent or unusable canvas leaves the rest of the page running.
fn start_hero(document: &Document, config: GridConfig) -> Option<AnimationHandle> {
    let Some(el) = document.get_element_by_id(HERO_CANVAS_ID) else {
        log::debug!("no #{HERO_CANVAS_ID}, hero animation skipped");
        return None;
    };
    let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() else {
        log::warn!("#{HERO_CANVAS_ID} is not a canvas, hero animation skipped");
        return None;
    };
    match start_animation(canvas, config) {
        Ok(animation) => Some(animation),
        Err(err) => {
            log::warn!("hero animation skipped: {err:?}");
            None
        }
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}
