//! Quadratic air drag on a spherical projectile.
//!
//! The projectile is treated as a solid sphere whose size follows from its
//! mass. Drag acts against the velocity relative to the air, so wind both
//! slows and pushes the projectile. The base drag coefficient is scaled by the
//! Reynolds band of the current airspeed (see [`crate::reynolds`]).

use std::f64::consts::PI;

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, MIN_RELATIVE_SPEED, PROJECTILE_DENSITY, SPHERE_DRAG_COEFFICIENT,
};
use crate::params::ProjectileParams;
use crate::reynolds::{adjusted_drag_coefficient, calculate_reynolds_number};
use crate::wind::wind_vector;
use crate::Vector2D;

/// Radius of a solid sphere of the given mass (m)
///
/// r = (3m / (4πρ))^(1/3)
pub fn sphere_radius(mass_kg: f64) -> f64 {
    ((3.0 * mass_kg) / (4.0 * PI * PROJECTILE_DENSITY)).cbrt()
}

/// Cross-sectional area of a solid sphere of the given mass (m²)
pub fn cross_sectional_area(mass_kg: f64) -> f64 {
    let radius = sphere_radius(mass_kg);
    PI * radius * radius
}

/// Base drag coefficient, falling back to a smooth sphere when unusable
pub fn base_drag_coefficient(params: &ProjectileParams) -> f64 {
    if params.drag_coefficient > 0.0 && params.drag_coefficient.is_finite() {
        params.drag_coefficient
    } else {
        SPHERE_DRAG_COEFFICIENT
    }
}

/// Velocity of the projectile relative to the surrounding air
pub fn relative_velocity(velocity: &Vector2D, params: &ProjectileParams) -> Vector2D {
    velocity - wind_vector(params)
}

/// Drag force on the projectile (N)
///
/// Returns a force, not an acceleration; callers divide by mass. The result
/// is zero when air resistance is off, when the mass is not positive, and
/// when the airspeed is below [`MIN_RELATIVE_SPEED`].
pub fn drag_force(velocity: &Vector2D, params: &ProjectileParams) -> Vector2D {
    if !params.air_resistance {
        return Vector2D::zeros();
    }
    if !(params.mass > 0.0 && params.mass.is_finite()) {
        return Vector2D::zeros();
    }

    let radius = sphere_radius(params.mass);
    let area = PI * radius * radius;

    let relative = relative_velocity(velocity, params);
    let relative_speed = relative.norm();
    if relative_speed < MIN_RELATIVE_SPEED {
        return Vector2D::zeros();
    }

    let reynolds = calculate_reynolds_number(relative_speed, 2.0 * radius);
    let cd = adjusted_drag_coefficient(base_drag_coefficient(params), reynolds);

    let magnitude = 0.5 * AIR_DENSITY_SEA_LEVEL * relative_speed * relative_speed * cd * area;

    // Opposite the relative velocity
    -relative * (magnitude / relative_speed)
}
