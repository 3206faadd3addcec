use crate::core::Rng;
use crate::domain::GridConfig;

use super::perf_stats::FrameStats;
use super::SceneCore;

pub(super) fn create_scene_core(width: u32, height: u32, config: GridConfig, rng: Rng) -> SceneCore {
    log::debug!(
        "agentic grid scene {}x{} (spacing {}, caps {}/{})",
        width,
        height,
        config.grid_size,
        config.max_nodes,
        config.max_pulses
    );
    SceneCore {
        config,
        width: width as f64,
        height: height as f64,
        time: 0,
        nodes: Vec::new(),
        pulses: Vec::new(),
        rng,
        last_draw_count: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
    }
}
