use crate::render::{DrawCommand, Surface};
use crate::systems::{grid_lines, nodes, pulses, FrameContext};

use super::{PerfTimer, SceneCore};

/// One frame: clear, advance time, grid, nodes, pulses.
pub(super) fn step(scene: &mut SceneCore, surface: &mut dyn Surface) {
    let timer = if scene.perf_enabled { Some(PerfTimer::start()) } else { None };

    scene.time += 1;
    let scroll_offset = grid_lines::scroll_offset(scene.time, scene.config.scroll_speed);

    let mut ctx = FrameContext {
        config: &scene.config,
        width: scene.width,
        height: scene.height,
        scroll_offset,
        rng: &mut scene.rng,
        surface,
        draw_calls: 0,
    };

    ctx.draw(DrawCommand::Clear {
        width: scene.width,
        height: scene.height,
    });
    grid_lines::draw_grid(&mut ctx);
    let node_tally = nodes::update_nodes(&mut scene.nodes, &mut ctx);
    let pulse_tally = pulses::update_pulses(&mut scene.pulses, &mut ctx);

    scene.last_draw_count = ctx.draw_calls;

    if let Some(timer) = timer {
        let stats = &mut scene.perf_stats;
        stats.frame = scene.time;
        stats.frame_ms = timer.elapsed_ms();
        stats.draw_calls = scene.last_draw_count;
        stats.nodes_spawned = node_tally.spawned;
        stats.nodes_expired = node_tally.expired;
        stats.pulses_spawned = pulse_tally.spawned;
        stats.pulses_expired = pulse_tally.expired;
        stats.node_count = scene.nodes.len() as u32;
        stats.pulse_count = scene.pulses.len() as u32;
    }
}
