//! Precondition errors, rejected exactly once at construction time —
//! the hot loop never re-validates.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("n must be at least 4, got {n}")]
    NTooSmall { n: usize },
    #[error("lambda must be positive, got {lambda}")]
    NonPositiveLambda { lambda: f64 },
    #[error("p_init must be in (0, 1], got {p_init}")]
    InvalidPInit { p_init: f64 },
    #[error("m (safeguard queue length) must be at least 1, got {m}")]
    ZeroQueueLength { m: usize },
    #[error("delta_s must be in (0, 1), got {delta_s}")]
    InvalidDeltaS { delta_s: f64 },
    #[error("delta_e must be greater than 1, got {delta_e}")]
    InvalidDeltaE { delta_e: f64 },
    #[error("maxiter must be at least 1, got {maxiter}")]
    ZeroMaxIter { maxiter: usize },
}
