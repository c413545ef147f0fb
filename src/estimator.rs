//! Closed-form estimate of apex height and range.
//!
//! Used for instant feedback while parameters change, without stepping a
//! simulation. The drag correction is an empirical decay factor built on the
//! ballistic coefficient, not an integral of the drag model in
//! [`crate::drag`], so the estimate and a stepped run will not agree exactly
//! once drag is on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{AIR_DENSITY_SEA_LEVEL, ESTIMATE_FACTOR_FLOOR, GRAVITY_MPS2};
use crate::drag::{base_drag_coefficient, cross_sectional_area};
use crate::params::ProjectileParams;
use crate::wind::wind_angle_rad;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryEstimate {
    pub max_height: f64, // m
    pub range: f64,      // m
}

/// Ballistic coefficient β = m / (Cd·A) of the spherical projectile (kg/m²)
pub fn ballistic_coefficient(params: &ProjectileParams) -> f64 {
    params.mass / (base_drag_coefficient(params) * cross_sectional_area(params.mass))
}

/// Apex height and range of a drag-free launch
pub fn vacuum_estimate(initial_velocity: f64, angle_rad: f64) -> TrajectoryEstimate {
    let vertical = initial_velocity * angle_rad.sin();
    TrajectoryEstimate {
        max_height: vertical * vertical / (2.0 * GRAVITY_MPS2),
        range: initial_velocity * initial_velocity * (2.0 * angle_rad).sin() / GRAVITY_MPS2,
    }
}

/// Estimate apex height and range for the given launch
///
/// With air resistance the vacuum values are scaled by decay factors clamped
/// at 0.3, and the range is corrected for the horizontal wind component.
pub fn estimate(params: &ProjectileParams) -> TrajectoryEstimate {
    let v0 = params.initial_velocity;
    if !(v0 > 0.0 && v0.is_finite()) {
        return TrajectoryEstimate { max_height: 0.0, range: 0.0 };
    }

    let theta = params.angle_rad();
    let mut result = vacuum_estimate(v0, theta);

    if params.air_resistance {
        if params.mass > 0.0 {
            let beta = ballistic_coefficient(params);
            let k = AIR_DENSITY_SEA_LEVEL / (2.0 * beta);
            let decay = (-k * v0).exp();

            let height_factor = (decay * (1.0 - k * v0 * theta.sin())).max(ESTIMATE_FACTOR_FLOOR);
            let range_factor = (decay * (1.0 - k * v0 * theta.cos())).max(ESTIMATE_FACTOR_FLOOR);

            result.max_height *= height_factor;
            result.range *= range_factor;
        }

        let wind_rad = wind_angle_rad(params.wind_direction, params.wind_convention);
        let wind_correction = 1.0 + (params.wind_speed * wind_rad.cos() / v0) * theta.cos();
        result.range *= wind_correction;
    }

    debug!(
        max_height = result.max_height,
        range = result.range,
        air_resistance = params.air_resistance,
        "trajectory estimate"
    );

    result
}
