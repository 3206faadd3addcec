use wasm_bindgen::prelude::*;

use crate::render::FrameRecorder;

use super::perf_stats::FrameStats;
use super::SceneCore;

/// Headless agentic grid for JS-side rendering and tests.
///
/// Each `step` renders into an internal recorder; `frame_json` hands the
/// recorded draw commands to JavaScript.
#[wasm_bindgen]
pub struct AgenticGrid {
    core: SceneCore,
    recorder: FrameRecorder,
}

#[wasm_bindgen]
impl AgenticGrid {
    /// Create a scene with the default look
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SceneCore::new(width, height),
            recorder: FrameRecorder::new(),
        }
    }

    /// Create a scene from a JSON configuration (missing fields keep their defaults)
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: u32, height: u32, json: String) -> Result<AgenticGrid, JsValue> {
        let core = SceneCore::from_config_json(width, height, &json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core,
            recorder: FrameRecorder::new(),
        })
    }

    /// Deterministic scene for reproducible captures
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self {
            core: SceneCore::with_seed(width, height, Default::default(), seed),
            recorder: FrameRecorder::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn scroll_offset(&self) -> f64 { self.core.scroll_offset() }

    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize { self.core.node_count() }

    #[wasm_bindgen(getter)]
    pub fn pulse_count(&self) -> usize { self.core.pulse_count() }

    #[wasm_bindgen(getter)]
    pub fn last_draw_count(&self) -> u32 { self.core.last_draw_count() }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Render the next frame into the recorder
    pub fn step(&mut self) {
        self.core.step(&mut self.recorder);
    }

    /// Draw commands of the last frame as a JSON array
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.recorder.commands()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Active configuration as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.core.get_perf_stats()
    }
}
