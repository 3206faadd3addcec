//! Scene - the hero background's animation state
//!
//! `SceneCore` owns everything that changes between frames: the time
//! counter, the node and pulse populations, the random source and the cached
//! surface size. One call to [`SceneCore::step`] renders one frame into a
//! [`Surface`]. Nothing else reads or writes this state.
//!
//! The per-frame work lives in systems/; this module only orders it.

use crate::core::Rng;
use crate::domain::{GridConfig, Node, Pulse};
use crate::render::Surface;
use crate::systems::grid_lines;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::AgenticGrid;
pub use perf_stats::FrameStats;

use perf_timer::PerfTimer;

pub struct SceneCore {
    config: GridConfig,

    // Surface size in pixels; changes apply from the next frame
    width: f64,
    height: f64,

    // State
    time: u64,
    nodes: Vec<Node>,
    pulses: Vec<Pulse>,
    rng: Rng,
    last_draw_count: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl SceneCore {
    /// Scene with the default look, seeded from the host.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_scene_core(width, height, GridConfig::default(), Rng::from_host())
    }

    pub fn with_config(width: u32, height: u32, config: GridConfig) -> Self {
        init::create_scene_core(width, height, config, Rng::from_host())
    }

    /// Fully deterministic scene
    pub fn with_seed(width: u32, height: u32, config: GridConfig, seed: u32) -> Self {
        init::create_scene_core(width, height, config, Rng::new(seed))
    }

    pub fn from_config_json(width: u32, height: u32, json: &str) -> Result<Self, String> {
        let config = GridConfig::from_json(json)?;
        Ok(Self::with_config(width, height, config))
    }

    pub fn config(&self) -> &GridConfig { &self.config }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    /// Frames rendered so far
    pub fn frame(&self) -> u64 { self.time }

    pub fn scroll_offset(&self) -> f64 {
        grid_lines::scroll_offset(self.time, self.config.scroll_speed)
    }

    pub fn nodes(&self) -> &[Node] { &self.nodes }

    pub fn pulses(&self) -> &[Pulse] { &self.pulses }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    pub fn pulse_count(&self) -> usize { self.pulses.len() }

    /// Draw commands issued by the last frame, including the clear
    pub fn last_draw_count(&self) -> u32 { self.last_draw_count }

    /// Update the cached surface size. Takes effect on the next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        settings::get_perf_stats(self)
    }

    /// Render one frame
    pub fn step(&mut self, surface: &mut dyn Surface) {
        step::step(self, surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
