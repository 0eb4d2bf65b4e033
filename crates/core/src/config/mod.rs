use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{knot::DEFAULT_RESOLUTION, KnotError, Result, Viewport};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub viewport: Viewport,
    pub knot: KnotConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Parses a JSON document. Missing sections fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(KnotError::InvalidConfig(format!(
                "viewport must be positive and finite, got {width}x{height}"
            )));
        }
        if self.knot.resolution == 0 {
            return Err(KnotError::InvalidConfig(
                "knot resolution must be at least 1".to_string(),
            ));
        }
        if !(self.simulation.max_speed.is_finite() && self.simulation.max_speed >= 0.0) {
            return Err(KnotError::InvalidConfig(format!(
                "max_speed must be non-negative, got {}",
                self.simulation.max_speed
            )));
        }
        Ok(())
    }
}

/// Curve and drawing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnotConfig {
    /// Samples generated per control point.
    pub resolution: usize,
    /// Circle radius for control points and stroke width for the curve.
    pub line_width: u32,
}

impl Default for KnotConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            line_width: 3,
        }
    }
}

/// Motion parameters used by the tick loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound (exclusive) of each randomly chosen velocity component.
    pub max_speed: f64,
    pub start_paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            start_paused: true,
        }
    }
}
