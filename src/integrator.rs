//! Fixed-step semi-implicit Euler integrator.
//!
//! Each step computes the acceleration from gravity and drag, updates the
//! velocity with it, then moves the position with the *updated* velocity.
//! The step is fixed at [`TIME_STEP_S`] and there is no ground check here;
//! deciding when a run is over belongs to the driving loop
//! (see [`crate::simulation`]).

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{GRAVITY_MPS2, TIME_STEP_S};
use crate::drag::drag_force;
use crate::params::ProjectileParams;
use crate::Vector2D;

/// One visited position in a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64, // m
    pub y: f64, // m
    pub t: f64, // s
}

impl TrajectoryPoint {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }
}

/// State of one simulation run
///
/// `trajectory` starts with the origin at t=0 and gains exactly one record per
/// step; `time` always equals the `t` of its last record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub time: f64,
    pub trajectory: Vec<TrajectoryPoint>,
}

impl Default for SimulationState {
    /// Empty placeholder state with no trajectory; not a valid launch state
    fn default() -> Self {
        Self {
            position: Vector2D::zeros(),
            velocity: Vector2D::zeros(),
            acceleration: Vector2D::zeros(),
            time: 0.0,
            trajectory: Vec::new(),
        }
    }
}

/// Constant gravitational acceleration
pub fn gravity() -> Vector2D {
    Vector2D::new(0.0, -GRAVITY_MPS2)
}

/// State at launch: at the origin, moving at `initial_velocity` along `angle`
pub fn initial_state(params: &ProjectileParams) -> SimulationState {
    let angle_rad = params.angle_rad();
    let velocity = Vector2D::new(
        params.initial_velocity * angle_rad.cos(),
        params.initial_velocity * angle_rad.sin(),
    );

    SimulationState {
        position: Vector2D::zeros(),
        velocity,
        acceleration: gravity(),
        time: 0.0,
        trajectory: vec![TrajectoryPoint::new(0.0, 0.0, 0.0)],
    }
}

/// Total acceleration of the projectile at the given velocity
pub fn acceleration(velocity: &Vector2D, params: &ProjectileParams) -> Vector2D {
    let mut acceleration = gravity();

    if params.air_resistance && params.mass > 0.0 {
        acceleration += drag_force(velocity, params) / params.mass;
    }

    acceleration
}

/// Kinematic part of a step, shared by [`step`] and [`advance`]
struct StepResult {
    position: Vector2D,
    velocity: Vector2D,
    acceleration: Vector2D,
    time: f64,
}

fn integrate(state: &SimulationState, params: &ProjectileParams) -> StepResult {
    let acceleration = acceleration(&state.velocity, params);

    // Velocity first, then position from the new velocity
    let velocity = state.velocity + acceleration * TIME_STEP_S;
    let position = state.position + velocity * TIME_STEP_S;
    let time = state.time + TIME_STEP_S;

    trace!(
        t = time,
        x = position.x,
        y = position.y,
        vx = velocity.x,
        vy = velocity.y,
        "integration step"
    );

    StepResult { position, velocity, acceleration, time }
}

/// Advance a state by one time step, leaving the input untouched
pub fn step(state: &SimulationState, params: &ProjectileParams) -> SimulationState {
    let next = integrate(state, params);

    let mut trajectory = Vec::with_capacity(state.trajectory.len() + 1);
    trajectory.extend_from_slice(&state.trajectory);
    trajectory.push(TrajectoryPoint::new(next.position.x, next.position.y, next.time));

    SimulationState {
        position: next.position,
        velocity: next.velocity,
        acceleration: next.acceleration,
        time: next.time,
        trajectory,
    }
}

/// Advance an owned state by one time step
///
/// Same result as [`step`], but reuses the trajectory buffer of the state it
/// consumes.
pub fn advance(mut state: SimulationState, params: &ProjectileParams) -> SimulationState {
    let next = integrate(&state, params);

    state.position = next.position;
    state.velocity = next.velocity;
    state.acceleration = next.acceleration;
    state.time = next.time;
    state
        .trajectory
        .push(TrajectoryPoint::new(next.position.x, next.position.y, next.time));
    state
}
