//! Domain - plain data for the hero animation and page behaviors

pub mod config;
pub mod node;
pub mod palette;
pub mod pulse;
pub mod site;

pub use config::GridConfig;
pub use node::Node;
pub use palette::Rgba;
pub use pulse::{Axis, Pulse};
