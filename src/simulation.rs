//! Driving loop and post-flight analysis.
//!
//! [`Simulation`] owns the single [`SimulationState`] of a run and threads it
//! through the integrator one tick at a time. The host decides the pacing: a
//! frame loop calls [`Simulation::tick`] once per frame, a batch caller uses
//! [`Simulation::run_to_landing`]. Stopping early is just not ticking again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::LANDING_TIME_GUARD_S;
use crate::error::{ProjectileError, Result};
use crate::integrator::{advance, initial_state, SimulationState, TrajectoryPoint};
use crate::params::ProjectileParams;
use crate::trajectory_sampling::{velocity_profile, VelocitySample};

/// When a run counts as landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingPolicy {
    /// Sub-ground samples before this time (s) are ignored
    pub min_flight_time: f64,
}

impl Default for LandingPolicy {
    fn default() -> Self {
        Self { min_flight_time: LANDING_TIME_GUARD_S }
    }
}

impl LandingPolicy {
    pub fn has_landed(&self, state: &SimulationState) -> bool {
        state.position.y < 0.0 && state.time > self.min_flight_time
    }
}

/// Results panel values derived from a finished trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub time_of_flight: f64, // s
    pub max_height: f64,     // m
    pub range: f64,          // m
}

impl FlightSummary {
    /// Analyse a trajectory; `None` when it is empty
    ///
    /// Time of flight and range are interpolated linearly at the last ground
    /// crossing. Without a crossing the last record is used as-is.
    pub fn from_trajectory(trajectory: &[TrajectoryPoint]) -> Option<Self> {
        let last = trajectory.last()?;
        let mut time_of_flight = last.t;
        let mut range = last.x;

        if let Some(i) = trajectory.iter().rposition(|p| p.y >= 0.0) {
            if let Some(below) = trajectory.get(i + 1) {
                let above = &trajectory[i];
                let frac = above.y / (above.y - below.y);
                time_of_flight = above.t + frac * (below.t - above.t);
                range = above.x + frac * (below.x - above.x);
            }
        }

        let max_height = trajectory
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self { time_of_flight, max_height, range })
    }
}

/// A single projectile run from launch to landing
#[derive(Debug, Clone)]
pub struct Simulation {
    params: ProjectileParams,
    state: SimulationState,
    policy: LandingPolicy,
}

impl Simulation {
    /// Validate the parameters and place the projectile at the origin
    pub fn launch(params: ProjectileParams) -> Result<Self> {
        params.validate()?;

        debug!(
            initial_velocity = params.initial_velocity,
            angle = params.angle,
            mass = params.mass,
            air_resistance = params.air_resistance,
            wind_speed = params.wind_speed,
            "launch"
        );

        let state = initial_state(&params);
        Ok(Self { params, state, policy: LandingPolicy::default() })
    }

    pub fn with_policy(mut self, policy: LandingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn params(&self) -> &ProjectileParams {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn has_landed(&self) -> bool {
        self.policy.has_landed(&self.state)
    }

    /// Start over from a fresh launch state with the same parameters
    pub fn relaunch(&mut self) {
        self.state = initial_state(&self.params);
    }

    /// Advance one step unless the projectile has landed
    ///
    /// Returns whether a step was taken.
    pub fn tick(&mut self) -> bool {
        if self.has_landed() {
            return false;
        }

        let state = std::mem::take(&mut self.state);
        self.state = advance(state, &self.params);

        if self.has_landed() {
            debug!(
                t = self.state.time,
                x = self.state.position.x,
                steps = self.state.trajectory.len() - 1,
                "landed"
            );
        }
        true
    }

    /// Tick until landing, taking at most `max_steps` steps
    pub fn run_to_landing(&mut self, max_steps: usize) -> Result<FlightSummary> {
        let mut steps = 0;
        while !self.has_landed() {
            if steps == max_steps {
                return Err(ProjectileError::NoLanding { steps });
            }
            self.tick();
            steps += 1;
        }

        self.summary().ok_or_else(|| "empty trajectory".into())
    }

    /// Flight summary of the trajectory so far
    pub fn summary(&self) -> Option<FlightSummary> {
        FlightSummary::from_trajectory(&self.state.trajectory)
    }

    /// Velocity history reconstructed from the trajectory
    pub fn velocity_profile(&self) -> Vec<VelocitySample> {
        velocity_profile(&self.state.trajectory, initial_state(&self.params).velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_STEPS;

    #[test]
    fn test_vacuum_flight() {
        let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
        let summary = sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();

        assert!(sim.has_landed());
        assert!((summary.time_of_flight - 2.88).abs() < 0.05);
        assert!((summary.range - 40.8).abs() < 0.5);
        assert!((summary.max_height - 10.2).abs() < 0.25);
    }

    #[test]
    fn test_tick_stops_after_landing() {
        let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
        sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();

        let len = sim.state().trajectory.len();
        assert!(!sim.tick());
        assert_eq!(sim.state().trajectory.len(), len);
    }

    #[test]
    fn test_landing_guard_for_flat_launch() {
        let params = ProjectileParams { angle: 0.0, ..Default::default() };
        let mut sim = Simulation::launch(params).unwrap();

        sim.tick();
        assert!(sim.state().position.y < 0.0);
        assert!(!sim.has_landed());

        sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();
        assert!(sim.state().time > LANDING_TIME_GUARD_S);
    }

    #[test]
    fn test_policy_without_guard_lands_on_first_tick() {
        let params = ProjectileParams { angle: 0.0, ..Default::default() };
        let mut sim = Simulation::launch(params)
            .unwrap()
            .with_policy(LandingPolicy { min_flight_time: 0.0 });

        assert!(!sim.has_landed());
        assert!(sim.tick());
        assert!(sim.has_landed());
        assert!(!sim.tick());
        assert_eq!(sim.state().trajectory.len(), 2);
    }

    #[test]
    fn test_step_cap() {
        let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
        match sim.run_to_landing(10) {
            Err(ProjectileError::NoLanding { steps }) => assert_eq!(steps, 10),
            other => panic!("expected NoLanding, got {:?}", other),
        }
        assert_eq!(sim.state().trajectory.len(), 11);
    }

    #[test]
    fn test_launch_rejects_invalid_params() {
        let params = ProjectileParams { mass: -1.0, ..Default::default() };
        assert!(Simulation::launch(params).is_err());
    }

    #[test]
    fn test_relaunch_resets_state() {
        let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
        for _ in 0..20 {
            sim.tick();
        }
        sim.relaunch();
        assert_eq!(sim.state(), &initial_state(sim.params()));
    }

    #[test]
    fn test_drag_shortens_flight() {
        let vacuum = Simulation::launch(ProjectileParams::default())
            .unwrap()
            .run_to_landing(DEFAULT_MAX_STEPS)
            .unwrap();

        let params = ProjectileParams {
            air_resistance: true,
            drag_coefficient: 0.47,
            mass: 0.1,
            ..Default::default()
        };
        let dragged = Simulation::launch(params)
            .unwrap()
            .run_to_landing(DEFAULT_MAX_STEPS)
            .unwrap();

        assert!(dragged.range < vacuum.range);
        assert!(dragged.max_height < vacuum.max_height);
    }

    #[test]
    fn test_summary_interpolates_crossing() {
        let trajectory = vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0),
            TrajectoryPoint::new(1.0, 3.0, 0.5),
            TrajectoryPoint::new(2.0, 1.0, 1.0),
            TrajectoryPoint::new(3.0, -1.0, 1.5),
        ];
        let summary = FlightSummary::from_trajectory(&trajectory).unwrap();

        assert!((summary.time_of_flight - 1.25).abs() < 1e-12);
        assert!((summary.range - 2.5).abs() < 1e-12);
        assert_eq!(summary.max_height, 3.0);
    }

    #[test]
    fn test_summary_without_crossing_uses_last_point() {
        let trajectory = vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0),
            TrajectoryPoint::new(1.0, 2.0, 0.5),
        ];
        let summary = FlightSummary::from_trajectory(&trajectory).unwrap();
        assert_eq!(summary.time_of_flight, 0.5);
        assert_eq!(summary.range, 1.0);

        assert!(FlightSummary::from_trajectory(&[]).is_none());
    }

    #[test]
    fn test_velocity_profile_length() {
        let mut sim = Simulation::launch(ProjectileParams::default()).unwrap();
        for _ in 0..30 {
            sim.tick();
        }
        let profile = sim.velocity_profile();
        assert_eq!(profile.len(), sim.state().trajectory.len());
        assert!((profile[0].speed - 20.0).abs() < 1e-9);
    }
}
