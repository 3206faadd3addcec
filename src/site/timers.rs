use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::domain::site::{
    footer_clock_text, CLOCK_ID, CLOCK_PERIOD_MS, HERO_ACTIVE_CLASS, HERO_SELECTOR,
    SPLASH_HIDDEN_CLASS, SPLASH_HOLD_MS, SPLASH_ID,
};

/// Timeouts and intervals that are cleared when the owner goes away
pub(super) struct Timers {
    window: Window,
    timeouts: Vec<i32>,
    intervals: Vec<i32>,
    callbacks: Vec<Closure<dyn FnMut()>>,
}

impl Timers {
    pub(super) fn new(window: Window) -> Self {
        Self {
            window,
            timeouts: Vec::new(),
            intervals: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    pub(super) fn set_timeout<F>(&mut self, ms: i32, f: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)?;
        self.timeouts.push(id);
        self.callbacks.push(cb);
        Ok(())
    }

    pub(super) fn set_interval<F>(&mut self, ms: i32, f: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)?;
        self.intervals.push(id);
        self.callbacks.push(cb);
        Ok(())
    }

    pub(super) fn clear(&mut self) {
        for id in self.timeouts.drain(..) {
            self.window.clear_timeout_with_handle(id);
        }
        for id in self.intervals.drain(..) {
            self.window.clear_interval_with_handle(id);
        }
        self.callbacks.clear();
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Hold the splash screen, then hand off to the hero entrance.
pub(super) fn install_splash(document: &Document, timers: &mut Timers) -> Result<(), JsValue> {
    let hero = document.query_selector(HERO_SELECTOR)?;
    let Some(splash) = document.get_element_by_id(SPLASH_ID) else {
        if let Some(hero) = hero {
            hero.class_list().add_1(HERO_ACTIVE_CLASS)?;
        }
        return Ok(());
    };

    timers.set_timeout(SPLASH_HOLD_MS, move || {
        let _ = splash.class_list().add_1(SPLASH_HIDDEN_CLASS);
        if let Some(hero) = &hero {
            let _ = hero.class_list().add_1(HERO_ACTIVE_CLASS);
        }
    })
}

/// Footer UTC clock, refreshed every second.
pub(super) fn install_clock(document: &Document, timers: &mut Timers) -> Result<(), JsValue> {
    update_clock(document);
    let document = document.clone();
    timers.set_interval(CLOCK_PERIOD_MS, move || update_clock(&document))
}

fn update_clock(document: &Document) {
    if let Some(el) = document.get_element_by_id(CLOCK_ID) {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        el.set_text_content(Some(&footer_clock_text(&iso)));
    }
}
