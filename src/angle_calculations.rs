use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{GRAVITY_MPS2, SWEEP_END_DEG, SWEEP_START_DEG, SWEEP_STEP_DEG};
use crate::params::ProjectileParams;
use crate::Vector2D;

/// Launch speed and angle that put a drag-free projectile through a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSolution {
    pub velocity: f64, // m/s
    pub angle: f64,    // degrees
}

/// Autopilot targeting by sweeping launch angles
///
/// For every angle in the sweep the drag-free range equation is solved for
/// the launch speed that reaches the target from the origin. The slowest of
/// those speeds wins (minimum-energy solution).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSolver {
    pub gravity: f64,   // m/s²
    pub start_deg: f64, // inclusive
    pub end_deg: f64,   // exclusive
    pub step_deg: f64,
}

impl Default for LaunchSolver {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_MPS2,
            start_deg: SWEEP_START_DEG,
            end_deg: SWEEP_END_DEG,
            step_deg: SWEEP_STEP_DEG,
        }
    }
}

impl LaunchSolver {
    /// Launch speed needed at `angle_rad` to pass through `target`
    ///
    /// `None` when the target cannot be reached at that angle.
    pub fn required_speed(&self, target: &Vector2D, angle_rad: f64) -> Option<f64> {
        let (dx, dy) = (target.x, target.y);
        let cos = angle_rad.cos();
        let tan = angle_rad.tan();

        let denominator = 2.0 * (dx * tan - dy) * cos * cos;
        if denominator <= 0.0 {
            return None;
        }

        let v0_squared = self.gravity * dx * dx / denominator;
        if !(v0_squared > 0.0 && v0_squared.is_finite()) {
            return None;
        }

        Some(v0_squared.sqrt())
    }

    /// Slowest launch that reaches `target`, or `None` if nothing does
    pub fn solve(&self, target: Option<Vector2D>) -> Option<LaunchSolution> {
        let target = target?;

        if !(self.step_deg > 0.0) {
            warn!(step_deg = self.step_deg, "angle sweep step must be positive");
            return None;
        }
        if !(self.start_deg.is_finite() && self.end_deg.is_finite()) {
            warn!(
                start_deg = self.start_deg,
                end_deg = self.end_deg,
                "angle sweep bounds must be finite"
            );
            return None;
        }

        let mut best: Option<LaunchSolution> = None;
        let mut i = 0usize;
        loop {
            let angle_deg = self.start_deg + i as f64 * self.step_deg;
            if angle_deg >= self.end_deg {
                break;
            }
            i += 1;

            let Some(v0) = self.required_speed(&target, angle_deg.to_radians()) else {
                continue;
            };
            if best.map_or(true, |b| v0 < b.velocity) {
                best = Some(LaunchSolution { velocity: v0, angle: angle_deg });
            }
        }

        match best {
            Some(solution) => debug!(
                target_x = target.x,
                target_y = target.y,
                velocity = solution.velocity,
                angle = solution.angle,
                "autopilot solution found"
            ),
            None => debug!(target_x = target.x, target_y = target.y, "no autopilot solution"),
        }

        best
    }
}

/// Solve for a target with the default sweep
pub fn solve_launch(target: Option<Vector2D>) -> Option<LaunchSolution> {
    LaunchSolver::default().solve(target)
}

/// Solve for the target stored in the launch parameters
pub fn solve_for_params(params: &ProjectileParams) -> Option<LaunchSolution> {
    solve_launch(params.target_position)
}
