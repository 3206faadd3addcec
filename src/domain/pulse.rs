use crate::core::Rng;

use super::config::GridConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Travels down a vertical grid line
    Vertical,
    /// Travels right along a (scrolling) horizontal grid line
    Horizontal,
}

/// Light trail traveling along one grid line.
#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    pub axis: Axis,
    pub line_index: u32,
    /// Trail length in pixels
    pub length: f64,
    pub speed: f64,
    /// Head position along the axis; starts at `-length` so the trail enters from off-surface
    pub progress: f64,
    pub active: bool,
}

impl Pulse {
    pub fn new(axis: Axis, line_index: u32, length: f64, speed: f64) -> Self {
        Self {
            axis,
            line_index,
            length,
            speed,
            progress: -length,
            active: true,
        }
    }

    pub fn spawn(rng: &mut Rng, config: &GridConfig, width: f64, height: f64) -> Self {
        let axis = if rng.next_f64() > 0.5 {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let speed = config.pulse_speed + rng.next_f64() * config.pulse_speed_jitter;
        let across = match axis {
            Axis::Vertical => width,
            Axis::Horizontal => height,
        };
        let line_index = rng.index(config.cells_across(across));
        let length = config.pulse_length_min + rng.next_f64() * config.pulse_length_jitter;
        Self::new(axis, line_index, length, speed)
    }

    /// Extent the pulse travels across: height for vertical, width for horizontal.
    #[inline]
    pub fn edge(&self, width: f64, height: f64) -> f64 {
        match self.axis {
            Axis::Vertical => height,
            Axis::Horizontal => width,
        }
    }

    /// Advance by one tick. Deactivates once the tail has cleared the far edge.
    #[inline]
    pub fn tick(&mut self, width: f64, height: f64) {
        self.progress += self.speed;
        if self.progress > self.edge(width, height) + self.length {
            self.active = false;
        }
    }

    /// (tail, head) along the travel axis
    #[inline]
    pub fn span(&self) -> (f64, f64) {
        (self.progress - self.length, self.progress)
    }
}
