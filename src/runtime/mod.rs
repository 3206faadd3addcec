//! Runtime - drives a scene from the host's frame scheduler
//!
//! [`FrameLoop`] is the host-independent half: one `tick` per display
//! refresh, a no-op once its [`CancelToken`] fires. On wasm32 the `raf`
//! module wires it to `requestAnimationFrame` and hands back an
//! [`AnimationHandle`] that stops the loop when told to or when dropped.

mod frame_loop;
#[cfg(target_arch = "wasm32")]
mod raf;

pub use frame_loop::{FrameLoop, LoopState};
#[cfg(target_arch = "wasm32")]
pub use raf::{start_animation, AnimationHandle};
