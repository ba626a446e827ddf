//! Outer active-set loop: `Init|SubspaceSolved -> ViolatorsLocated ->
//! {Converged | adapt p, sort, reassign -> SubspaceSolved}`, capped at
//! `maxiter`.

use crate::banded::BandedSolve;
use crate::config::SolverConfig;
use crate::diff_ops::apply_d;
use crate::dual_update::update_dual;
use crate::primal::update_primal;
use crate::queue::ViolatorQueue;
use crate::reassign::reassign_violators;
use crate::violators::locate_violators;
use crate::Status;

/// Scratch buffers the driver threads through every iteration, owned by
/// [`crate::TrendFilterSolver`] and reused across `solve` calls.
pub(crate) struct DriverScratch {
    pub(crate) diff_x: Vec<f64>,
    pub(crate) div_zi: Vec<f64>,
    pub(crate) active_idx: Vec<usize>,
    pub(crate) banded: BandedSolve,
    pub(crate) vio_index: Vec<usize>,
    pub(crate) vio_fitness: Vec<f64>,
    pub(crate) vio_sort: Vec<usize>,
    pub(crate) queue: ViolatorQueue,
}

impl DriverScratch {
    pub(crate) fn new(n: usize, config: &SolverConfig) -> Self {
        let m = n - 2;
        DriverScratch {
            diff_x: vec![0.0; m],
            div_zi: vec![0.0; n],
            active_idx: Vec::with_capacity(m),
            banded: BandedSolve::with_capacity(m),
            vio_index: vec![0usize; m],
            vio_fitness: vec![0.0; m],
            vio_sort: vec![0usize; m],
            queue: ViolatorQueue::new(config.m, n),
        }
    }
}

/// Run the active-set loop to convergence or `maxiter`. Mutates `x`, `z`,
/// and the scratch buffers in place; returns the terminal status.
pub(crate) fn active_set_driver(
    y: &[f64],
    x: &mut [f64],
    z: &mut [f64],
    lambda: f64,
    p: &mut f64,
    config: &SolverConfig,
    scratch: &mut DriverScratch,
) -> Status {
    for iter in 1..=config.maxiter {
        update_dual(y, z, &mut scratch.div_zi, &mut scratch.active_idx, &mut scratch.banded, lambda);
        update_primal(y, z, lambda, x);
        apply_d(x, &mut scratch.diff_x);

        let n_vio = locate_violators(
            z,
            &scratch.diff_x,
            lambda,
            &mut scratch.vio_index,
            &mut scratch.vio_fitness,
            &mut scratch.vio_sort,
        );
        let n_active = scratch.active_idx.len();
        tracing::debug!(iter, n_vio, n_active, p = *p, "active-set iteration");

        if n_vio == 0 {
            tracing::info!(iterations = iter, "solved");
            return Status::Converged;
        }

        *p = scratch.queue.update(n_vio, *p, config.delta_s, config.delta_e);
        reassign_violators(z, &scratch.vio_index, &scratch.vio_fitness, &mut scratch.vio_sort, n_vio, *p);
    }

    // The last reassignment above moved z without recomputing x against it;
    // restore invariant I3 (x = y - lambda Dt z) on this return path too.
    update_primal(y, z, lambda, x);
    tracing::warn!(iterations = config.maxiter, "maxiter exceeded");
    Status::MaxIter
}
