use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

struct Registration {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Event listeners that unregister themselves when cleared or dropped
#[derive(Default)]
pub(super) struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    pub(super) fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.registrations.push(Registration {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub(super) fn len(&self) -> usize {
        self.registrations.len()
    }

    pub(super) fn clear(&mut self) {
        for reg in self.registrations.drain(..) {
            let _ = reg
                .target
                .remove_event_listener_with_callback(reg.event, reg.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}
