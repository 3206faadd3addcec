use crate::domain::{Axis, Pulse};
use crate::render::DrawCommand;

use super::grid_lines::scrolled_row_y;
use super::{FrameContext, PopulationTally};

/// Advance every pulse, drop the ones past the far edge and draw the rest, then maybe spawn one.
pub fn update_pulses(pulses: &mut Vec<Pulse>, ctx: &mut FrameContext<'_>) -> PopulationTally {
    let mut tally = PopulationTally::default();
    let (width, height) = (ctx.width, ctx.height);

    pulses.retain_mut(|pulse| {
        pulse.tick(width, height);
        if !pulse.active {
            tally.expired += 1;
            return false;
        }
        draw_pulse(pulse, ctx);
        true
    });

    if pulses.len() < ctx.config.max_pulses && ctx.rng.chance(ctx.config.pulse_prob) {
        pulses.push(Pulse::spawn(ctx.rng, ctx.config, width, height));
        tally.spawned += 1;
    }

    tally
}

fn draw_pulse(pulse: &Pulse, ctx: &mut FrameContext<'_>) {
    let config = ctx.config;
    let (tail_at, head_at) = pulse.span();

    let (tail, head) = match pulse.axis {
        Axis::Vertical => {
            let x = pulse.line_index as f64 * config.grid_size;
            ((x, tail_at), (x, head_at))
        }
        // Horizontal lines scroll, so the beam follows its line down the surface
        Axis::Horizontal => {
            let y = scrolled_row_y(config, pulse.line_index, ctx.scroll_offset, ctx.height);
            ((tail_at, y), (head_at, y))
        }
    };

    ctx.draw(DrawCommand::Beam {
        tail,
        head,
        color: config.active_color,
        head_alpha: config.pulse_opacity,
        width: config.pulse_width,
    });
}
