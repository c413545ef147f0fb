/// Physical and numerical constants used by the projectile engine

/// Gravitational acceleration in m/s²
pub const GRAVITY_MPS2: f64 = 9.81;

/// Fixed integration step in seconds (~60 Hz frame pacing)
pub const TIME_STEP_S: f64 = 0.016;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Density of the projectile material (kg/m³)
///
/// Projectiles are modeled as solid spheres; 2700 kg/m³ is roughly aluminium.
/// The sphere radius is derived from mass through this density.
pub const PROJECTILE_DENSITY: f64 = 2700.0;

/// Kinematic viscosity of air at 20°C (m²/s)
pub const KINEMATIC_VISCOSITY_AIR: f64 = 1.5e-5;

/// Drag coefficient of a smooth sphere, used when no usable coefficient is given
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

/// Relative airspeed below which drag is treated as zero (m/s)
pub const MIN_RELATIVE_SPEED: f64 = 0.01;

// Reynolds number banding
//
// The drag coefficient is scaled by a discrete multiplier per flow band. The
// bands do not interpolate into each other.

/// Upper Reynolds bound of the laminar band
pub const RE_LAMINAR_UPPER: f64 = 1e5;

/// Lower Reynolds bound of the turbulent band
pub const RE_TURBULENT_LOWER: f64 = 2e5;

/// Drag coefficient multiplier in the laminar band
pub const LAMINAR_DRAG_MULTIPLIER: f64 = 1.5;

/// Drag coefficient multiplier in the turbulent band (drag crisis)
pub const TURBULENT_DRAG_MULTIPLIER: f64 = 0.2;

/// Fraction of wind speed applied as a vertical component
pub const VERTICAL_WIND_FRACTION: f64 = 0.1;

/// Lower clamp for the analytic drag correction factors
pub const ESTIMATE_FACTOR_FLOOR: f64 = 0.3;

/// Minimum flight time before a sub-ground sample counts as a landing (s)
///
/// Near-zero launch angles dip below y=0 on the very first samples; the guard
/// keeps those from ending the run.
pub const LANDING_TIME_GUARD_S: f64 = 0.3;

/// Default cap on integration steps for a run to landing
///
/// 100 000 steps at 16 ms is about 27 minutes of simulated flight.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

// Autopilot angle sweep

/// First launch angle tried by the autopilot sweep (degrees)
pub const SWEEP_START_DEG: f64 = 1.0;

/// Exclusive upper bound of the autopilot sweep (degrees)
pub const SWEEP_END_DEG: f64 = 90.0;

/// Angle increment of the autopilot sweep (degrees)
pub const SWEEP_STEP_DEG: f64 = 0.1;
