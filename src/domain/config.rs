//! Animation configuration
//!
//! Defaults reproduce the shipped hero background. A JSON document may
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use super::palette::{Rgba, CYAN};

pub const GRID_SIZE: f64 = 40.0;
pub const SCROLL_SPEED: f64 = 0.25;
pub const NODE_PROB: f64 = 0.02;
pub const PULSE_PROB: f64 = 0.03;
pub const PULSE_SPEED: f64 = 2.5;
pub const MAX_NODES: usize = 15;
pub const MAX_PULSES: usize = 8;
/// Finest grid spacing accepted from a config document
pub const MIN_GRID_SIZE: f64 = 1.0;
/// Upper bound for either population cap
pub const MAX_POPULATION: usize = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Spacing between grid lines, in surface pixels
    pub grid_size: f64,
    /// Pixels the horizontal lines travel per frame
    pub scroll_speed: f64,
    pub line_color: Rgba,
    pub line_width: f64,
    pub active_color: Rgba,

    pub node_prob: f64,
    pub max_nodes: usize,
    pub node_life_min: f64,
    pub node_life_jitter: f64,
    /// Ticks spent fading in and out
    pub node_fade_ticks: f64,
    pub node_radius: f64,
    pub node_glow: f64,

    pub pulse_prob: f64,
    pub max_pulses: usize,
    pub pulse_speed: f64,
    pub pulse_speed_jitter: f64,
    pub pulse_length_min: f64,
    pub pulse_length_jitter: f64,
    /// Head opacity of the beam gradient
    pub pulse_opacity: f64,
    pub pulse_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            scroll_speed: SCROLL_SPEED,
            line_color: CYAN.with_alpha(0.05),
            line_width: 1.0,
            active_color: CYAN,

            node_prob: NODE_PROB,
            max_nodes: MAX_NODES,
            node_life_min: 30.0,
            node_life_jitter: 30.0,
            node_fade_ticks: 10.0,
            node_radius: 2.0,
            node_glow: 8.0,

            pulse_prob: PULSE_PROB,
            max_pulses: MAX_PULSES,
            pulse_speed: PULSE_SPEED,
            pulse_speed_jitter: 2.0,
            pulse_length_min: 50.0,
            pulse_length_jitter: 100.0,
            pulse_opacity: 0.4,
            pulse_width: 1.5,
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GridConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        fn positive(name: &str, v: f64) -> Result<(), String> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a positive number, got {v}"))
            }
        }
        fn non_negative(name: &str, v: f64) -> Result<(), String> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a non-negative number, got {v}"))
            }
        }
        fn population(name: &str, v: usize) -> Result<(), String> {
            if (1..=MAX_POPULATION).contains(&v) {
                Ok(())
            } else {
                Err(format!("{name} must be within [1, {MAX_POPULATION}], got {v}"))
            }
        }
        fn probability(name: &str, v: f64) -> Result<(), String> {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(format!("{name} must be within [0, 1], got {v}"))
            }
        }

        positive("grid_size", self.grid_size)?;
        if self.grid_size < MIN_GRID_SIZE {
            return Err(format!("grid_size must be at least {MIN_GRID_SIZE}, got {}", self.grid_size));
        }
        non_negative("scroll_speed", self.scroll_speed)?;
        positive("line_width", self.line_width)?;
        probability("line_color.a", self.line_color.a)?;
        probability("active_color.a", self.active_color.a)?;

        probability("node_prob", self.node_prob)?;
        population("max_nodes", self.max_nodes)?;
        non_negative("node_life_min", self.node_life_min)?;
        non_negative("node_life_jitter", self.node_life_jitter)?;
        positive("node_fade_ticks", self.node_fade_ticks)?;
        positive("node_radius", self.node_radius)?;
        non_negative("node_glow", self.node_glow)?;

        probability("pulse_prob", self.pulse_prob)?;
        population("max_pulses", self.max_pulses)?;
        positive("pulse_speed", self.pulse_speed)?;
        non_negative("pulse_speed_jitter", self.pulse_speed_jitter)?;
        positive("pulse_length_min", self.pulse_length_min)?;
        non_negative("pulse_length_jitter", self.pulse_length_jitter)?;
        probability("pulse_opacity", self.pulse_opacity)?;
        positive("pulse_width", self.pulse_width)?;
        Ok(())
    }

    /// Number of grid cells needed to cover `extent` pixels.
    #[inline]
    pub fn cells_across(&self, extent: f64) -> u32 {
        if extent <= 0.0 {
            return 0;
        }
        (extent / self.grid_size).ceil() as u32
    }
}
