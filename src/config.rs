// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use macroquad::file::load_string;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::from_str;
use thiserror::Error;
use tracing::{info, warn};

use crate::maps::map_generator::GenerationParams;
use crate::rings::board::RING_COUNT;

pub const MAZE_CONFIG_PATH: &str = "assets/maze.json";
pub const RINGS_CONFIG_PATH: &str = "assets/rings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings file shared shape: JSON with every key optional.
pub trait GameConfig: DeserializeOwned + Default {
    fn validate(&self) -> Result<(), ConfigError>;

    fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub time_limit_secs: f64,
    pub visibility_radius: usize,
    pub hint_radius: usize,
    pub hint_duration_secs: f64,
    pub hint_count: u32,
    pub dead_end_bias: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            cell_size: 25.0,
            time_limit_secs: 180.0,
            visibility_radius: 3,
            hint_radius: 8,
            hint_duration_secs: 2.0,
            hint_count: 3,
            dead_end_bias: 0.3,
        }
    }
}

impl MazeConfig {
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            width: self.width,
            height: self.height,
            dead_end_bias: self.dead_end_bias,
            ..GenerationParams::default()
        }
    }
}

impl GameConfig for MazeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 5 || self.height < 5 {
            return Err(ConfigError::Invalid(format!(
                "maze must be at least 5x5, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.dead_end_bias) {
            return Err(ConfigError::Invalid(format!(
                "dead_end_bias must be within [0, 1], got {}",
                self.dead_end_bias
            )));
        }
        if self.cell_size <= 0.0 || self.time_limit_secs <= 0.0 || self.hint_duration_secs < 0.0 {
            return Err(ConfigError::Invalid("sizes and durations must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RingConfig {
    /// Side of the square board area in pixels; the board is centred in it.
    pub size: f32,
    /// Outer radius of each ring, innermost first.
    pub radii: Vec<f32>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: 600.0,
            radii: vec![60.0, 110.0, 160.0, 210.0],
        }
    }
}

impl GameConfig for RingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.radii.len() != RING_COUNT {
            return Err(ConfigError::Invalid(format!(
                "expected {} radii, got {}",
                RING_COUNT,
                self.radii.len()
            )));
        }
        let increasing = self.radii.windows(2).all(|w| w[0] < w[1]);
        if !increasing || self.radii[0] <= 0.0 {
            return Err(ConfigError::Invalid("radii must be positive and strictly increasing".into()));
        }
        if self.radii[RING_COUNT - 1] * 2.0 > self.size {
            return Err(ConfigError::Invalid("outer ring does not fit the board".into()));
        }
        Ok(())
    }
}

/// Loads `path`, falling back to defaults when the file is missing or bad.
pub async fn load_or_default<T: GameConfig>(path: &str) -> T {
    let text = match load_string(path).await {
        Ok(text) => text,
        Err(_) => {
            info!(path, "no config file, using defaults");
            return T::default();
        }
    };

    match T::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!(path, %err, "ignoring config file");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = MazeConfig::from_json(r#"{ "width": 31, "hint_count": 5 }"#).unwrap();
        assert_eq!(config.width, 31);
        assert_eq!(config.height, 25);
        assert_eq!(config.hint_count, 5);
        assert_eq!(config.time_limit_secs, 180.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(MazeConfig::from_json("{}").unwrap(), MazeConfig::default());
        assert_eq!(RingConfig::from_json("{}").unwrap(), RingConfig::default());
    }

    #[test]
    fn rejects_tiny_maze() {
        let err = MazeConfig::from_json(r#"{ "width": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_out_of_range_bias() {
        assert!(MazeConfig::from_json(r#"{ "dead_end_bias": 1.5 }"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MazeConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn ring_radii_must_increase() {
        assert!(RingConfig::from_json(r#"{ "radii": [60, 50, 160, 210] }"#).is_err());
        assert!(RingConfig::from_json(r#"{ "radii": [60, 110, 160] }"#).is_err());
        assert!(RingConfig::from_json(r#"{ "size": 300 }"#).is_err());
        assert!(RingConfig::from_json(r#"{ "radii": [50, 100, 150, 200] }"#).is_ok());
    }

    #[test]
    fn generation_params_follow_config() {
        let config = MazeConfig { width: 15, height: 9, dead_end_bias: 0.0, ..Default::default() };
        let params = config.generation_params();
        assert_eq!((params.width, params.height), (15, 9));
        assert_eq!(params.dead_end_bias, 0.0);
    }
}
