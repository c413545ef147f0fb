//! # Projectile Engine
//!
//! 2D projectile motion under gravity, optional quadratic air drag and wind.
//!
//! The engine is a set of pure functions over plain data. A host (a frame
//! loop, a CLI, a browser page) owns one [`SimulationState`] per run and
//! threads it through [`step`] until the projectile lands. [`estimate`] and
//! [`LaunchSolver`] answer instantly without stepping.
//!
//! ```
//! use projectile_engine::{ProjectileParams, Simulation, DEFAULT_MAX_STEPS};
//!
//! let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
//! let summary = sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();
//! assert!((summary.range - 40.8).abs() < 0.5);
//! ```

/// 2D vector used for positions, velocities, accelerations and forces
pub type Vector2D = nalgebra::Vector2<f64>;

// Re-export the main types and functions
pub use angle_calculations::{solve_for_params, solve_launch, LaunchSolution, LaunchSolver};
pub use constants::{DEFAULT_MAX_STEPS, GRAVITY_MPS2, TIME_STEP_S};
pub use drag::drag_force;
pub use error::{ProjectileError, Result};
pub use estimator::{estimate, TrajectoryEstimate};
pub use integrator::{advance, initial_state, step, SimulationState, TrajectoryPoint};
pub use params::{ProjectileParams, WindConvention};
pub use simulation::{FlightSummary, LandingPolicy, Simulation};
pub use trajectory_sampling::{downsample, velocity_profile, VelocitySample};

// Module declarations
pub mod angle_calculations;
pub mod constants;
pub mod drag;
pub mod error;
pub mod estimator;
pub mod integrator;
pub mod params;
pub mod reynolds;
pub mod simulation;
pub mod trajectory_sampling;
pub mod wind;

#[cfg(feature = "wasm")]
pub mod wasm;
