//! Reynolds number banding of the drag coefficient.
//!
//! The flow around the projectile is sorted into three bands by Reynolds
//! number and the input drag coefficient is scaled by a fixed multiplier per
//! band. The multipliers jump at the band edges; there is no blending between
//! them.

use crate::constants::{
    KINEMATIC_VISCOSITY_AIR, LAMINAR_DRAG_MULTIPLIER, RE_LAMINAR_UPPER, RE_TURBULENT_LOWER,
    TURBULENT_DRAG_MULTIPLIER,
};

/// Flow regime classification based on Reynolds number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,        // Re < 1e5
    Transitional,   // 1e5 <= Re <= 2e5
    Turbulent,      // Re > 2e5
}

impl FlowRegime {
    /// Multiplier applied to the base drag coefficient in this regime
    pub fn drag_multiplier(self) -> f64 {
        match self {
            FlowRegime::Laminar => LAMINAR_DRAG_MULTIPLIER,
            FlowRegime::Transitional => 1.0,
            FlowRegime::Turbulent => TURBULENT_DRAG_MULTIPLIER,
        }
    }
}

/// Calculate Reynolds number for a sphere moving through air
///
/// Re = V × D / ν
///
/// # Arguments
/// * `speed_mps` - Airspeed in meters per second
/// * `diameter_m` - Sphere diameter in meters
pub fn calculate_reynolds_number(speed_mps: f64, diameter_m: f64) -> f64 {
    speed_mps * diameter_m / KINEMATIC_VISCOSITY_AIR
}

/// Determine flow regime based on Reynolds number
pub fn get_flow_regime(reynolds_number: f64) -> FlowRegime {
    if reynolds_number < RE_LAMINAR_UPPER {
        FlowRegime::Laminar
    } else if reynolds_number > RE_TURBULENT_LOWER {
        FlowRegime::Turbulent
    } else {
        FlowRegime::Transitional
    }
}

/// Drag coefficient after the Reynolds band multiplier is applied
pub fn adjusted_drag_coefficient(base_cd: f64, reynolds_number: f64) -> f64 {
    base_cd * get_flow_regime(reynolds_number).drag_multiplier()
}
