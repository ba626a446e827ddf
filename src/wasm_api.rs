//! WASM bindings for the trend-filtering solver.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and use
//! serde-wasm-bindgen for the compound result type.

use wasm_bindgen::prelude::*;

use crate::{SolverConfig, Status, TrendFilterSolver};

/// Serializable mirror of a solve outcome, returned to JS as a `JsValue`.
#[derive(serde::Serialize)]
struct SolveResult {
    x: Vec<f64>,
    z: Vec<f64>,
    converged: bool,
}

/// Run the solver to convergence (or `maxiter`) on a single trace.
///
/// Returns a `JsValue` containing the serialized `{ x, z, converged }`.
#[wasm_bindgen]
pub fn trend_filter_solve(
    y: &[f64],
    lambda: f64,
    p_init: f64,
    m: usize,
    delta_s: f64,
    delta_e: f64,
    maxiter: usize,
) -> JsValue {
    let config = SolverConfig {
        p_init,
        m,
        delta_s,
        delta_e,
        maxiter,
        tol: 1e-6,
    };
    let n = y.len();
    let result = TrendFilterSolver::try_new(n, lambda, config).map(|mut solver| {
        let status = solver.solve(y);
        SolveResult {
            x: solver.solution().to_vec(),
            z: solver.dual().to_vec(),
            converged: status == Status::Converged,
        }
    });

    match result {
        Ok(result) => serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    }
}

/// Install a panic hook that forwards Rust panics to the JS console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
