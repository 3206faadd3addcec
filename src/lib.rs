//! AVOI site engine - client-side behavior for the AVOI marketing site
//!
//! The hero background ("agentic grid") is a small animation: a scrolling
//! lattice, blinking nodes at intersections and light pulses running along
//! the lines. The rest of the crate wires up page behaviors: reveal on
//! scroll, smooth anchors, the mobile menu, the splash screen, the footer
//! clock.
//!
//! Architecture:
//! - core/        - random source, cancellation
//! - domain/      - configuration, palette, node/pulse entities, page constants
//! - systems/     - per-frame grid, node and pulse logic
//! - render/      - draw commands and surfaces (canvas, recorder)
//! - simulation/  - scene state and the wasm facade
//! - runtime/     - frame loop and requestAnimationFrame driver
//! - site/        - DOM wiring (wasm32 only)

pub mod core;
pub mod domain;
pub mod render;
pub mod runtime;
pub mod simulation;
pub mod systems;
#[cfg(target_arch = "wasm32")]
pub mod site;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Already initialised on a second call; keep the first logger
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"AVOI site engine initialized".into());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{GridConfig, Node, Pulse};
pub use render::{DrawCommand, FrameRecorder, Surface};
pub use runtime::{FrameLoop, LoopState};
pub use simulation::{AgenticGrid, FrameStats, SceneCore};
#[cfg(target_arch = "wasm32")]
pub use runtime::{start_animation, AnimationHandle};
#[cfg(target_arch = "wasm32")]
pub use site::{start_site, SiteHandle};
