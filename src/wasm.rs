// WASM bindings so a browser page can drive the engine from its frame loop.
//
// Values cross the boundary as plain JS objects through serde-wasm-bindgen.
// Vectors serialize as `[x, y]` arrays.
use wasm_bindgen::prelude::*;

use crate::{
    estimate, initial_state, solve_launch, step, ProjectileParams, SimulationState, Simulation,
    Vector2D,
};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_params(params: JsValue) -> Result<ProjectileParams, JsValue> {
    let params: ProjectileParams = serde_wasm_bindgen::from_value(params)?;
    params.validate().map_err(to_js_error)?;
    Ok(params)
}

#[wasm_bindgen(js_name = defaultParams)]
pub fn default_params() -> JsValue {
    serde_wasm_bindgen::to_value(&ProjectileParams::default()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = getInitialState)]
pub fn get_initial_state(params: JsValue) -> Result<JsValue, JsValue> {
    let params = parse_params(params)?;
    Ok(serde_wasm_bindgen::to_value(&initial_state(&params))?)
}

#[wasm_bindgen(js_name = simulateNextStep)]
pub fn simulate_next_step(state: JsValue, params: JsValue) -> Result<JsValue, JsValue> {
    let state: SimulationState = serde_wasm_bindgen::from_value(state)?;
    let params = parse_params(params)?;
    Ok(serde_wasm_bindgen::to_value(&step(&state, &params))?)
}

#[wasm_bindgen(js_name = estimateTrajectory)]
pub fn estimate_trajectory(params: JsValue) -> Result<JsValue, JsValue> {
    let params = parse_params(params)?;
    Ok(serde_wasm_bindgen::to_value(&estimate(&params))?)
}

/// Autopilot suggestion for a target, or `null` when it cannot be reached
#[wasm_bindgen(js_name = solveLaunch)]
pub fn solve_launch_js(target_x: f64, target_y: f64) -> Result<JsValue, JsValue> {
    match solve_launch(Some(Vector2D::new(target_x, target_y))) {
        Some(solution) => Ok(serde_wasm_bindgen::to_value(&solution)?),
        None => Ok(JsValue::NULL),
    }
}

/// Owned run for hosts that keep the state on the Rust side
#[wasm_bindgen]
pub struct WasmSimulation {
    inner: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<WasmSimulation, JsValue> {
        let params: ProjectileParams = serde_wasm_bindgen::from_value(params)?;
        let inner = Simulation::launch(params).map_err(to_js_error)?;
        Ok(WasmSimulation { inner })
    }

    pub fn tick(&mut self) -> bool {
        self.inner.tick()
    }

    #[wasm_bindgen(js_name = hasLanded)]
    pub fn has_landed(&self) -> bool {
        self.inner.has_landed()
    }

    pub fn relaunch(&mut self) {
        self.inner.relaunch();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.state())?)
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.summary())?)
    }

    #[wasm_bindgen(js_name = velocityProfile)]
    pub fn velocity_profile(&self, max_points: usize) -> Result<JsValue, JsValue> {
        let samples = crate::downsample(&self.inner.velocity_profile(), max_points);
        Ok(serde_wasm_bindgen::to_value(&samples)?)
    }
}
