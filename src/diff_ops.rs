//! Stencil operators for the second-order difference operator `D` and its
//! adjoint `Dᵀ`.
//!
//! `D` maps a length-`n` primal vector to a length-`(n-2)` vector:
//! `(Dx)_i = -x_i + 2 x_{i+1} - x_{i+2}`. `Dᵀ` is the adjoint, mapping a
//! length-`(n-2)` vector back to length `n`, with truncated stencils at the
//! four boundary rows.

/// Apply the forward operator: `out[i] = -x[i] + 2*x[i+1] - x[i+2]` for
/// `i = 0..n-2`.
///
/// `x` must have length `n`, `out` must have length `n - 2`.
pub(crate) fn apply_d(x: &[f64], out: &mut [f64]) {
    let n = x.len();
    debug_assert!(n >= 2);
    debug_assert_eq!(out.len(), n - 2);
    for i in 0..n - 2 {
        out[i] = -x[i] + 2.0 * x[i + 1] - x[i + 2];
    }
}

/// Apply the adjoint operator: produces a length-`n` vector from a
/// length-`(n-2)` input `z`, i.e. `out = Dᵀ z`.
///
/// `(Dᵀz)_j = -z[j] + 2*z[j-1] - z[j-2]`, each term present only while its
/// index falls in `[0, m-1]` (`m = n-2`). At `j=0,1` and `j=n-2,n-1` this
/// truncates to the boundary stencils `y[0] = -x[0]`, `y[1] = 2x[0] - x[1]`
/// and their mirror image at the other end.
pub(crate) fn apply_dt(z: &[f64], out: &mut [f64]) {
    let n = out.len();
    let m = z.len();
    debug_assert_eq!(m, n.saturating_sub(2));

    for j in 0..n {
        let mut acc = 0.0;
        if j < m {
            acc -= z[j];
        }
        if j >= 1 && j - 1 < m {
            acc += 2.0 * z[j - 1];
        }
        if j >= 2 && j - 2 < m {
            acc -= z[j - 2];
        }
        out[j] = acc;
    }
}
