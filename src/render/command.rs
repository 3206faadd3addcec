use serde::Serialize;

use crate::domain::Rgba;

pub type Point = (f64, f64);

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Wipe `[0, width] x [0, height]`
    Clear { width: f64, height: f64 },
    /// Solid stroked segment
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    /// Filled circle at `alpha`, drawn a second time with a shadow glow of `glow` px
    Dot {
        center: Point,
        radius: f64,
        color: Rgba,
        alpha: f64,
        glow: f64,
    },
    /// Segment stroked with a linear gradient, transparent at `tail`, `head_alpha` at `head`
    Beam {
        tail: Point,
        head: Point,
        color: Rgba,
        head_alpha: f64,
        width: f64,
    },
}
