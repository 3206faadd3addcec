use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::core::CancelToken;
use crate::domain::GridConfig;
use crate::render::CanvasSurface;
use crate::simulation::SceneCore;

use super::{FrameLoop, LoopState};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running hero animation. Stops on `stop()` or when dropped.
#[wasm_bindgen]
pub struct AnimationHandle {
    window: Window,
    token: CancelToken,
    frame_loop: Rc<RefCell<FrameLoop>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame_slot: FrameSlot,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl AnimationHandle {
    /// Cancel the pending frame and release every callback. Idempotent.
    pub fn stop(&mut self) {
        if self.token.is_cancelled() && self.on_resize.is_none() {
            return;
        }
        self.token.cancel();
        if let Some(id) = self.raf_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        if let Some(cb) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        // Breaks the closure's reference to its own slot
        self.frame_slot.borrow_mut().take();
        log::debug!("agentic grid stopped after {} frames", self.frame());
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        !self.token.is_cancelled()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.frame_loop.borrow().scene().frame()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the agentic grid on `canvas`, sized to its on-screen box and
/// resized with the window.
#[wasm_bindgen(js_name = startAgenticGrid)]
pub fn start_agentic_grid(canvas: HtmlCanvasElement) -> Result<AnimationHandle, JsValue> {
    start_animation(canvas, GridConfig::default())
}

pub fn start_animation(canvas: HtmlCanvasElement, config: GridConfig) -> Result<AnimationHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let (width, height) = fit_canvas(&canvas);
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(SceneCore::with_config(width, height, config))));
    let token = frame_loop.borrow().token();

    let on_resize = {
        let frame_loop = frame_loop.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = fit_canvas(&canvas);
            frame_loop.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
    {
        let slot = frame_slot.clone();
        let raf_id = raf_id.clone();
        let window = window.clone();
        let frame_loop = frame_loop.clone();
        let mut surface = CanvasSurface::new(ctx);

        *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            if frame_loop.borrow_mut().tick(&mut surface) == LoopState::Stopped {
                return;
            }
            if let Some(cb) = slot.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));
    }

    let handle = AnimationHandle {
        window,
        token,
        frame_loop,
        raf_id,
        frame_slot,
        on_resize: Some(on_resize),
    };

    // On failure the handle drops here and unregisters the resize listener
    let first = handle
        .frame_slot
        .borrow()
        .as_ref()
        .map(|cb| handle.window.request_animation_frame(cb.as_ref().unchecked_ref()));
    if let Some(id) = first.transpose()? {
        handle.raf_id.set(Some(id));
    }
    log::info!("agentic grid started at {}x{}", width, height);

    Ok(handle)
}

/// Match the canvas backing store to its layout box.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}
