use serde::{Deserialize, Serialize};

use crate::integrator::TrajectoryPoint;
use crate::Vector2D;

/// Velocity at one trajectory record, as plotted against time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySample {
    pub time: f64,  // s
    pub vx: f64,    // m/s
    pub vy: f64,    // m/s
    pub speed: f64, // m/s
}

impl VelocitySample {
    fn from_components(time: f64, vx: f64, vy: f64) -> Self {
        Self { time, vx, vy, speed: (vx * vx + vy * vy).sqrt() }
    }
}

/// Reconstruct velocities from recorded positions
///
/// The first record takes `seed_velocity` (the launch velocity); every later
/// one uses the backward difference against the record before it. A
/// non-positive time delta yields a zero velocity.
pub fn velocity_profile(trajectory: &[TrajectoryPoint], seed_velocity: Vector2D) -> Vec<VelocitySample> {
    let Some(first) = trajectory.first() else {
        return Vec::new();
    };

    let mut samples = Vec::with_capacity(trajectory.len());
    samples.push(VelocitySample::from_components(first.t, seed_velocity.x, seed_velocity.y));

    for pair in trajectory.windows(2) {
        let (prev, point) = (&pair[0], &pair[1]);
        let dt = point.t - prev.t;
        let (vx, vy) = if dt > 0.0 {
            ((point.x - prev.x) / dt, (point.y - prev.y) / dt)
        } else {
            (0.0, 0.0)
        };
        samples.push(VelocitySample::from_components(point.t, vx, vy));
    }

    samples
}

/// Thin a series to roughly `max_points` entries by keeping every n-th one
///
/// The stride is `max(1, len / max_points)`, so the result can hold up to
/// twice `max_points` entries for lengths just under a multiple. A zero
/// `max_points` returns the series unchanged.
pub fn downsample<T: Clone>(samples: &[T], max_points: usize) -> Vec<T> {
    if max_points == 0 {
        return samples.to_vec();
    }

    let stride = (samples.len() / max_points).max(1);
    samples.iter().step_by(stride).cloned().collect()
}
