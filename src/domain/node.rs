use crate::core::Rng;

use super::config::GridConfig;

/// Short-lived blinking marker pinned to a grid intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub grid_x: u32,
    pub grid_y: u32,
    /// Ticks lived so far
    pub age: u32,
    pub max_life: f64,
    pub active: bool,
}

impl Node {
    pub fn new(grid_x: u32, grid_y: u32, max_life: f64) -> Self {
        Self {
            grid_x,
            grid_y,
            age: 0,
            max_life,
            active: true,
        }
    }

    /// Random intersection inside a `width` x `height` surface, random lifetime.
    pub fn spawn(rng: &mut Rng, config: &GridConfig, width: f64, height: f64) -> Self {
        let grid_x = rng.index(config.cells_across(width));
        let grid_y = rng.index(config.cells_across(height));
        let max_life = config.node_life_min + rng.next_f64() * config.node_life_jitter;
        Self::new(grid_x, grid_y, max_life)
    }

    /// Age by one tick. Deactivates once the age passes `max_life`.
    #[inline]
    pub fn tick(&mut self) {
        self.age = self.age.saturating_add(1);
        if self.age as f64 > self.max_life {
            self.active = false;
        }
    }

    /// Triangular blink curve: fade in, hold, fade out. Always within [0, 1].
    pub fn opacity(&self, fade_ticks: f64) -> f64 {
        let age = self.age as f64;
        let alpha = if age < fade_ticks {
            age / fade_ticks
        } else if age > self.max_life - fade_ticks {
            (self.max_life - age) / fade_ticks
        } else {
            1.0
        };
        alpha.clamp(0.0, 1.0)
    }
}
