//! Dual subproblem orchestration: assembles the banded active-set
//! system from the current partition and writes the solved `z_A` back.

use crate::banded::BandedSolve;

fn is_pinned(v: f64) -> bool {
    v == 1.0 || v == -1.0
}

/// `Dᵀ z_I`: the adjoint stencil applied to the inactive part of `z` only
/// (active coordinates contribute `0`). Walked directly over `z` rather
/// than materializing a masked copy.
fn divergence_of_inactive(z: &[f64], out: &mut [f64]) {
    let n = out.len();
    let m = z.len();
    debug_assert_eq!(m, n.saturating_sub(2));

    for j in 0..n {
        let mut acc = 0.0;
        if j < m && is_pinned(z[j]) {
            acc -= z[j];
        }
        if j >= 1 && j - 1 < m && is_pinned(z[j - 1]) {
            acc += 2.0 * z[j - 1];
        }
        if j >= 2 && j - 2 < m && is_pinned(z[j - 2]) {
            acc -= z[j - 2];
        }
        out[j] = acc;
    }
}

/// Resolve the active set `A`, solve `D_A D_Aᵀ z_A = D_A(y/λ − D_Iᵀ z_I)`,
/// and write the result back into `z`. `active_idx` and `div_zi` are
/// caller-owned scratch (reused across iterations, cleared but never
/// reallocated once warmed up to capacity `n-2`/`n`).
///
/// A lost-positive-definiteness banded solve is logged via `tracing::warn!`
/// and otherwise ignored: the driver keeps going with whatever `z_A` came
/// out — this never surfaces as a `Result` the caller must handle.
pub(crate) fn update_dual(
    y: &[f64],
    z: &mut [f64],
    div_zi: &mut [f64],
    active_idx: &mut Vec<usize>,
    banded: &mut BandedSolve,
    lambda: f64,
) {
    let m = z.len();
    divergence_of_inactive(z, div_zi);

    active_idx.clear();
    for i in 0..m {
        if !is_pinned(z[i]) {
            active_idx.push(i);
        }
    }

    banded.build(active_idx);
    let rhs = banded.rhs_mut();
    for (k, &i) in active_idx.iter().enumerate() {
        rhs[k] = (2.0 * y[i + 1] - y[i] - y[i + 2]) / lambda - 2.0 * div_zi[i + 1] + div_zi[i] + div_zi[i + 2];
    }

    if let Err(failed_at) = banded.solve() {
        tracing::warn!(failed_at, k = active_idx.len(), "banded solve lost positive definiteness");
    }

    let solution = banded.solution();
    for (k, &i) in active_idx.iter().enumerate() {
        z[i] = solution[k];
    }
}
