//! Typed tuning-parameter bundle for the active-set driver.

use crate::error::ConfigError;

/// Tuning knobs for [`crate::TrendFilterSolver`]. Validated once, at
/// construction; the hot loop trusts these values unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(any(feature = "wasm", feature = "python"), derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Initial reassignment proportion, `p_init ∈ (0, 1]`.
    pub p_init: f64,
    /// Safeguard queue length (number of trailing violator counts tracked).
    pub m: usize,
    /// Shrink factor applied to `p` on stagnation, `δ_s ∈ (0, 1)`.
    pub delta_s: f64,
    /// Expand factor applied to `p` on a new minimum, `δ_e > 1`.
    pub delta_e: f64,
    /// Iteration budget before giving up with `Status::MaxIter`.
    pub maxiter: usize,
    /// Reserved convergence tolerance knob; the core itself declares
    /// convergence purely via `n_vio = 0`, but callers that want
    /// a secondary numerical check can read this back.
    pub tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            p_init: 0.5,
            m: 5,
            delta_s: 0.8,
            delta_e: 1.1,
            maxiter: 500,
            tol: 1e-6,
        }
    }
}

impl SolverConfig {
    /// Validate every precondition. Called once by
    /// [`crate::TrendFilterSolver::try_new`]; never re-checked afterward.
    pub fn validate(&self, n: usize, lambda: f64) -> Result<(), ConfigError> {
        if n < 4 {
            return Err(ConfigError::NTooSmall { n });
        }
        if !(lambda > 0.0) {
            return Err(ConfigError::NonPositiveLambda { lambda });
        }
        if !(self.p_init > 0.0 && self.p_init <= 1.0) {
            return Err(ConfigError::InvalidPInit { p_init: self.p_init });
        }
        if self.m < 1 {
            return Err(ConfigError::ZeroQueueLength { m: self.m });
        }
        if !(self.delta_s > 0.0 && self.delta_s < 1.0) {
            return Err(ConfigError::InvalidDeltaS { delta_s: self.delta_s });
        }
        if !(self.delta_e > 1.0) {
            return Err(ConfigError::InvalidDeltaE { delta_e: self.delta_e });
        }
        if self.maxiter < 1 {
            return Err(ConfigError::ZeroMaxIter { maxiter: self.maxiter });
        }
        Ok(())
    }
}
