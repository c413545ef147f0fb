use std::f64::consts::PI;

use crate::constants::VERTICAL_WIND_FRACTION;
use crate::params::{ProjectileParams, WindConvention};
use crate::Vector2D;

/// Wind angle in radians for a direction given in degrees
///
/// 0 rad blows toward +x, π rad toward -x.
pub fn wind_angle_rad(direction_deg: f64, convention: WindConvention) -> f64 {
    match convention {
        WindConvention::Continuous => direction_deg.to_radians(),
        WindConvention::LeftRight => {
            if direction_deg == 0.0 {
                0.0
            } else {
                PI
            }
        }
    }
}

/// Wind velocity vector for the given parameters
///
/// The wind blows mostly horizontally; a small vertical component of
/// `0.1 * speed * sin(angle)` is added. Zero wind speed gives a zero vector.
pub fn wind_vector(params: &ProjectileParams) -> Vector2D {
    if params.wind_speed == 0.0 {
        return Vector2D::zeros();
    }

    let angle_rad = wind_angle_rad(params.wind_direction, params.wind_convention);
    Vector2D::new(
        params.wind_speed * angle_rad.cos(),
        params.wind_speed * VERTICAL_WIND_FRACTION * angle_rad.sin(),
    )
}
