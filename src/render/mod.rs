//! Render - draw command vocabulary and the surfaces that consume it
//!
//! The scene never talks to a canvas directly. Each frame it emits
//! [`DrawCommand`]s into a [`Surface`]: the 2d canvas on wasm32, or a
//! [`FrameRecorder`] in tests and headless use.

mod command;
mod recorder;
#[cfg(target_arch = "wasm32")]
mod canvas;

pub use command::{DrawCommand, Point};
pub use recorder::FrameRecorder;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Sink for one frame's draw commands
pub trait Surface {
    fn draw(&mut self, command: &DrawCommand);
}
