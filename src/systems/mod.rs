//! Systems - per-frame logic for the grid, nodes and pulses
//!
//! Each system reads the shared [`FrameContext`] and draws into its surface.
//! The scene calls them in a fixed order: grid, nodes, pulses.

pub mod grid_lines;
pub mod nodes;
pub mod pulses;

use crate::core::Rng;
use crate::domain::GridConfig;
use crate::render::{DrawCommand, Surface};

/// Everything a system needs for one frame
pub struct FrameContext<'a> {
    pub config: &'a GridConfig,
    pub width: f64,
    pub height: f64,
    pub scroll_offset: f64,
    pub rng: &'a mut Rng,
    pub surface: &'a mut dyn Surface,
    /// Commands issued so far this frame
    pub draw_calls: u32,
}

impl<'a> FrameContext<'a> {
    #[inline]
    pub fn draw(&mut self, command: DrawCommand) {
        self.surface.draw(&command);
        self.draw_calls += 1;
    }
}

/// Spawn/expire counts a population system reports back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationTally {
    pub spawned: u32,
    pub expired: u32,
}
