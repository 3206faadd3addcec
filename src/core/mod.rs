//! Core utilities shared by every layer: random source and cancellation.

pub mod cancel;
pub mod random;

pub use cancel::CancelToken;
pub use random::Rng;
