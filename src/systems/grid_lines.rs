//! Grid geometry
//!
//! Vertical lines are fixed. Horizontal line `k` sits at
//! `(k * spacing + scroll_offset) mod height`, so the lattice appears to
//! drift downward and wrap at the bottom edge.

use crate::domain::GridConfig;
use crate::render::DrawCommand;

use super::FrameContext;

/// Scroll distance after `time` frames.
#[inline]
pub fn scroll_offset(time: u64, scroll_speed: f64) -> f64 {
    time as f64 * scroll_speed
}

/// `value mod extent` into `[0, extent)`. A non-positive extent leaves the value as is.
#[inline]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value.rem_euclid(extent)
    } else {
        value
    }
}

/// X of every vertical line from 0 up to and including `width`.
pub fn vertical_line_xs(config: &GridConfig, width: f64) -> impl Iterator<Item = f64> {
    let spacing = config.grid_size;
    let count = if width >= 0.0 { ((width / spacing).floor() as u32).saturating_add(1) } else { 0 };
    (0..count).map(move |k| k as f64 * spacing)
}

/// Y of every horizontal line at the given scroll offset. Empty for a zero height.
pub fn horizontal_line_ys(config: &GridConfig, scroll_offset: f64, height: f64) -> impl Iterator<Item = f64> {
    let spacing = config.grid_size;
    (0..config.cells_across(height)).map(move |k| wrap(k as f64 * spacing + scroll_offset, height))
}

/// Screen Y of grid row `row` after scrolling.
#[inline]
pub fn scrolled_row_y(config: &GridConfig, row: u32, scroll_offset: f64, height: f64) -> f64 {
    wrap(row as f64 * config.grid_size + scroll_offset, height)
}

pub fn draw_grid(ctx: &mut FrameContext<'_>) {
    let config = ctx.config;
    let (width, height) = (ctx.width, ctx.height);

    for x in vertical_line_xs(config, width) {
        ctx.draw(DrawCommand::Line {
            from: (x, 0.0),
            to: (x, height),
            color: config.line_color,
            width: config.line_width,
        });
    }

    for y in horizontal_line_ys(config, ctx.scroll_offset, height) {
        ctx.draw(DrawCommand::Line {
            from: (0.0, y),
            to: (width, y),
            color: config.line_color,
            width: config.line_width,
        });
    }
}
