//! Launch parameters and their boundary validation.
//!
//! [`ProjectileParams`] is set once before launch and never changes during a
//! run. It can be built in code, loaded from TOML, or assembled from CLI flags.
//! Every key is optional in TOML; missing keys take the values from
//! [`ProjectileParams::default`], so a file can override just the fields it
//! cares about:
//!
//! ```toml
//! initial_velocity = 35.0
//! angle = 30.0
//! air_resistance = true
//! drag_coefficient = 0.47
//! wind_speed = 5.0
//! wind_direction = 180.0
//! target_position = [120.0, 0.0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ProjectileError, Result};
use crate::Vector2D;

/// How `wind_direction` (degrees) maps to a wind angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindConvention {
    /// Any direction in degrees; 0 blows toward +x, 180 toward -x.
    #[default]
    Continuous,
    /// Two-valued: 0 blows toward +x, any other value toward -x.
    LeftRight,
}

/// Launch parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileParams {
    pub initial_velocity: f64,       // m/s
    pub angle: f64,                  // degrees above horizontal
    pub mass: f64,                   // kg
    pub air_resistance: bool,
    pub drag_coefficient: f64,       // dimensionless; 0 selects the sphere default
    pub wind_speed: f64,             // m/s
    pub wind_direction: f64,         // degrees
    pub wind_convention: WindConvention,
    pub target_position: Option<Vector2D>, // meters, autopilot only
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            initial_velocity: 20.0,
            angle: 45.0,
            mass: 1.0,
            air_resistance: false,
            drag_coefficient: 0.02,
            wind_speed: 0.0,
            wind_direction: 0.0,
            wind_convention: WindConvention::Continuous,
            target_position: None,
        }
    }
}

impl ProjectileParams {
    /// Launch angle in radians
    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }

    /// Reject parameters outside their physical range.
    ///
    /// The physics functions never call this themselves; they stay total and
    /// fall back to sentinel values. Hosts validate once at launch.
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(ref err) = result {
            warn!(error = %err, "rejected projectile parameters");
        }
        result
    }

    fn check(&self) -> Result<()> {
        require(
            "initial_velocity",
            self.initial_velocity,
            self.initial_velocity > 0.0,
            "must be greater than zero",
        )?;
        require(
            "angle",
            self.angle,
            (0.0..=90.0).contains(&self.angle),
            "must be within [0, 90] degrees",
        )?;
        require("mass", self.mass, self.mass > 0.0, "must be greater than zero")?;
        if self.air_resistance {
            require(
                "drag_coefficient",
                self.drag_coefficient,
                self.drag_coefficient >= 0.0,
                "must not be negative",
            )?;
        }
        require(
            "wind_speed",
            self.wind_speed,
            self.wind_speed >= 0.0,
            "must not be negative",
        )?;
        require("wind_direction", self.wind_direction, true, "must be finite")?;
        if let Some(target) = self.target_position {
            require("target_position.x", target.x, true, "must be finite")?;
            require("target_position.y", target.y, true, "must be finite")?;
        }
        Ok(())
    }

    /// Parse and validate parameters from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let params: ProjectileParams = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate parameters from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}

fn require(name: &'static str, value: f64, ok: bool, reason: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectileError::InvalidArgument {
            name,
            value,
            reason: "must be finite",
        });
    }
    if !ok {
        return Err(ProjectileError::InvalidArgument { name, value, reason });
    }
    Ok(())
}
