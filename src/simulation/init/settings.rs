use super::perf_stats::FrameStats;
use super::SceneCore;

pub(super) fn resize(scene: &mut SceneCore, width: u32, height: u32) {
    scene.width = width as f64;
    scene.height = height as f64;
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> FrameStats {
    scene.perf_stats.clone()
}
