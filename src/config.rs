// src/config.rs
// Simulation tunables. Defaults are the canonical gameplay constants; a JSON
// file can override them for experimentation without recompiling.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Downward acceleration, units/s².
    pub gravity: f32,
    /// Upward velocity applied on jump, units/s.
    pub jump_impulse: f32,
    /// Speed of player-fired projectiles, units/s.
    pub bullet_speed: f32,
    /// Lifetime of player-fired projectiles, seconds.
    pub bullet_ttl: f32,
    /// Player shots per second.
    pub fire_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            jump_impulse: 5.0,
            bullet_speed: 40.0,
            bullet_ttl: 4.0,
            fire_rate: 8.0,
        }
    }
}

impl SimConfig {
    /// Loads overrides from a JSON file; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
