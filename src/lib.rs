//! One-dimensional second-order ℓ₁ trend filtering via a primal active-set
//! / dual-ascent scheme.
//!
//! Given observations `y` and a regularization weight `λ > 0`, computes
//!
//! `x* = argmin_x  ½‖y − x‖² + λ‖Dx‖₁`
//!
//! where `D` is the second-order difference operator. The dual problem is
//! a box-constrained quadratic in `z ∈ [-1, 1]^{n-2}`; the solver alternates
//! an exact banded solve on the active (unconstrained) dual coordinates
//! with a damped, proportional reassignment of KKT violators across the
//! active/inactive partition.
//!
//! Use [`TrendFilterSolver`] to reuse scratch buffers across repeated calls
//! against the same problem size, or the free function [`solve`] for a
//! one-shot call with the literal `(n, y, lambda, x_out, z_inout, config)`
//! contract.

mod banded;
mod config;
mod diff_ops;
mod driver;
mod dual_update;
mod error;
mod primal;
mod queue;
mod reassign;
mod violators;

#[cfg(feature = "wasm")]
mod wasm_api;

#[cfg(feature = "python")]
mod py_api;

pub use config::SolverConfig;
pub use error::ConfigError;

use driver::{active_set_driver, DriverScratch};

/// Terminal state of an `active_set_driver` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The active-set scan reported zero KKT violators.
    Converged,
    /// The iteration budget (`config.maxiter`) was exhausted first.
    MaxIter,
}

/// Owns the persistent scratch buffers and tuning config for repeated
/// solves against a fixed problem size `n`.
pub struct TrendFilterSolver {
    n: usize,
    lambda: f64,
    config: SolverConfig,
    x: Vec<f64>,
    z: Vec<f64>,
    p: f64,
    scratch: DriverScratch,
}

impl TrendFilterSolver {
    /// Validate preconditions once and allocate every buffer the
    /// driver will ever need. No further allocation happens in `solve`.
    pub fn try_new(n: usize, lambda: f64, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate(n, lambda)?;
        let p = config.p_init;
        let scratch = DriverScratch::new(n, &config);
        Ok(TrendFilterSolver {
            n,
            lambda,
            config,
            x: vec![0.0; n],
            z: vec![0.0; n - 2],
            p,
            scratch,
        })
    }

    /// Drive the active-set loop to convergence or `maxiter`. `y` must have
    /// length `n`. The dual `z` carries over from the previous call (or the
    /// all-zero initial state if this is the first), matching the
    /// warm-startable behavior of the underlying free function.
    pub fn solve(&mut self, y: &[f64]) -> Status {
        debug_assert_eq!(y.len(), self.n);
        active_set_driver(y, &mut self.x, &mut self.z, self.lambda, &mut self.p, &self.config, &mut self.scratch)
    }

    pub fn solution(&self) -> &[f64] {
        &self.x
    }

    pub fn dual(&self) -> &[f64] {
        &self.z
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

/// One-shot entry point matching the specification contract exactly:
/// `z_inout` seeds the initial dual and receives the final dual; `x_out`
/// receives the final primal. Preconditions are assumed already validated
/// (e.g. via [`SolverConfig::validate`]) — this is a thin wrapper around a
/// transient [`TrendFilterSolver`], not a second validation point.
pub fn solve(n: usize, y: &[f64], lambda: f64, x_out: &mut [f64], z_inout: &mut [f64], config: &SolverConfig) -> Status {
    let mut solver = TrendFilterSolver::try_new(n, lambda, *config)
        .expect("solve: invalid preconditions; validate via SolverConfig::validate first");
    solver.z.copy_from_slice(z_inout);
    let status = solver.solve(y);
    x_out.copy_from_slice(solver.solution());
    z_inout.copy_from_slice(solver.dual());
    status
}
