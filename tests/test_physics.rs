// End-to-end flight scenarios through the public API

use projectile_engine::drag::{cross_sectional_area, sphere_radius};
use projectile_engine::reynolds::{calculate_reynolds_number, get_flow_regime, FlowRegime};
use projectile_engine::{
    advance, drag_force, estimate, initial_state, solve_for_params, step, LandingPolicy,
    ProjectileParams, Simulation, Vector2D, WindConvention, DEFAULT_MAX_STEPS,
};

fn fly(params: ProjectileParams) -> f64 {
    let mut sim = Simulation::launch(params).unwrap();
    sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap().range
}

fn with_drag() -> ProjectileParams {
    ProjectileParams {
        air_resistance: true,
        drag_coefficient: 0.47,
        ..Default::default()
    }
}

#[test]
fn test_drag_shortens_flight() {
    let vacuum = fly(ProjectileParams::default());
    let dragged = fly(with_drag());

    assert!(dragged < vacuum, "drag {dragged} vs vacuum {vacuum}");
    assert!(dragged > 0.5 * vacuum);
}

#[test]
fn test_tailwind_and_headwind() {
    let calm = fly(with_drag());
    let tail = fly(ProjectileParams { wind_speed: 10.0, wind_direction: 0.0, ..with_drag() });
    let head = fly(ProjectileParams { wind_speed: 10.0, wind_direction: 180.0, ..with_drag() });

    assert!(tail > calm);
    assert!(head < calm);
}

#[test]
fn test_wind_ignored_without_air_resistance() {
    let calm = fly(ProjectileParams::default());
    let windy = fly(ProjectileParams { wind_speed: 15.0, wind_direction: 180.0, ..Default::default() });
    assert_eq!(calm, windy);
}

#[test]
fn test_left_right_convention_treats_any_nonzero_as_leftward() {
    let head = fly(ProjectileParams { wind_speed: 10.0, wind_direction: 180.0, ..with_drag() });
    let binary = fly(ProjectileParams {
        wind_speed: 10.0,
        wind_direction: 90.0,
        wind_convention: WindConvention::LeftRight,
        ..with_drag()
    });
    assert!((head - binary).abs() < 1e-9);
}

#[test]
fn test_heavier_sphere_carries_further_through_air() {
    let light = fly(with_drag());
    let heavy = fly(ProjectileParams { mass: 10.0, ..with_drag() });
    assert!(heavy > light);
}

#[test]
fn test_step_does_not_mutate_input() {
    let params = with_drag();
    let state = initial_state(&params);
    let before = state.clone();

    let next = step(&state, &params);

    assert_eq!(state, before);
    assert_eq!(next.trajectory.len(), state.trajectory.len() + 1);
    assert!(next.time > state.time);
}

#[test]
fn test_autopilot_solution_hits_target() {
    let params = ProjectileParams {
        target_position: Some(Vector2D::new(60.0, 0.0)),
        ..Default::default()
    };
    let solution = solve_for_params(&params).unwrap();

    let range = fly(ProjectileParams {
        initial_velocity: solution.velocity,
        angle: solution.angle,
        ..params
    });
    assert!((range - 60.0).abs() < 1.0, "landed at {range}");
}

#[test]
fn test_estimate_tracks_vacuum_simulation() {
    let params = ProjectileParams { initial_velocity: 30.0, angle: 60.0, ..Default::default() };
    let est = estimate(&params);
    let mut sim = Simulation::launch(params).unwrap();
    let summary = sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();

    assert!((summary.range - est.range).abs() / est.range < 0.02);
    assert!((summary.max_height - est.max_height).abs() / est.max_height < 0.02);
}

#[test]
fn test_relaunch_reproduces_the_run() {
    let mut sim = Simulation::launch(with_drag()).unwrap();
    let first = sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();
    let trajectory = sim.state().trajectory.clone();

    sim.relaunch();
    assert_eq!(sim.state().trajectory.len(), 1);

    let second = sim.run_to_landing(DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(first, second);
    assert_eq!(sim.state().trajectory, trajectory);
}

#[test]
fn test_state_serializes_vectors_as_pairs() {
    let state = initial_state(&ProjectileParams::default());
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["position"], serde_json::json!([0.0, 0.0]));
    assert_eq!(json["velocity"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["trajectory"][0]["t"], serde_json::json!(0.0));
}

#[test]
fn test_transitional_band_keeps_base_drag_coefficient() {
    // 30 m/s at 45°: a 1 kg sphere stays between Re 1e5 and 2e5 all flight
    let params = ProjectileParams { initial_velocity: 30.0, ..with_drag() };
    let diameter = 2.0 * sphere_radius(params.mass);
    let area = cross_sectional_area(params.mass);
    let policy = LandingPolicy::default();

    let mut state = initial_state(&params);
    let mut steps = 0;
    while !policy.has_landed(&state) {
        let speed = state.velocity.norm();
        let re = calculate_reynolds_number(speed, diameter);
        assert_eq!(get_flow_regime(re), FlowRegime::Transitional, "Re {re} at t={}", state.time);

        let force = drag_force(&state.velocity, &params);
        let expected = 0.5 * 1.225 * speed * speed * 0.47 * area;
        assert!((force.norm() - expected).abs() < 1e-9);
        assert!(force.dot(&state.velocity) < 0.0);

        state = advance(state, &params);
        steps += 1;
    }
    assert!(steps > 100);
}
