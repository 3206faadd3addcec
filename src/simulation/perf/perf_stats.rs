use wasm_bindgen::prelude::*;

/// Snapshot of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) frame_ms: f64,
    pub(super) draw_calls: u32,
    pub(super) nodes_spawned: u32,
    pub(super) nodes_expired: u32,
    pub(super) pulses_spawned: u32,
    pub(super) pulses_expired: u32,
    pub(super) node_count: u32,
    pub(super) pulse_count: u32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_calls(&self) -> u32 { self.draw_calls }
    #[wasm_bindgen(getter)]
    pub fn nodes_spawned(&self) -> u32 { self.nodes_spawned }
    #[wasm_bindgen(getter)]
    pub fn nodes_expired(&self) -> u32 { self.nodes_expired }
    #[wasm_bindgen(getter)]
    pub fn pulses_spawned(&self) -> u32 { self.pulses_spawned }
    #[wasm_bindgen(getter)]
    pub fn pulses_expired(&self) -> u32 { self.pulses_expired }
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> u32 { self.node_count }
    #[wasm_bindgen(getter)]
    pub fn pulse_count(&self) -> u32 { self.pulse_count }
}
