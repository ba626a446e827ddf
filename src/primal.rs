//! Fused primal update: `x <- y - lambda * Dᵀ z`, computed in a single
//! pass over the output index without materializing a separate `Dᵀz`
//! buffer.

/// Overwrite `x` with `y - lambda * Dᵀz`.
///
/// `y` and `x` have length `n`; `z` has length `n - 2`. Each `x[i]` is
/// produced from at most three consecutive `z` entries, with the boundary
/// rows (`i = 0, 1, n-2, n-1`) using the truncated stencil — see
/// [`crate::diff_ops::apply_dt`] for the same index-validity logic applied
/// to a bare `Dᵀ` application.
pub(crate) fn update_primal(y: &[f64], z: &[f64], lambda: f64, x: &mut [f64]) {
    let n = y.len();
    let m = z.len();
    debug_assert_eq!(x.len(), n);
    debug_assert_eq!(m, n.saturating_sub(2));

    for i in 0..n {
        let mut dtz = 0.0;
        if i < m {
            dtz -= z[i];
        }
        if i >= 1 && i - 1 < m {
            dtz += 2.0 * z[i - 1];
        }
        if i >= 2 && i - 2 < m {
            dtz -= z[i - 2];
        }
        x[i] = y[i] - lambda * dtz;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff_ops::apply_dt;

    #[test]
    fn matches_apply_dt_composition() {
        let n = 11;
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let z: Vec<f64> = (0..n - 2).map(|i| ((i as f64) * 0.3).sin() * 0.4).collect();
        let lambda = 0.7;

        let mut dtz = vec![0.0; n];
        apply_dt(&z, &mut dtz);
        let expected: Vec<f64> = y.iter().zip(dtz.iter()).map(|(&yi, &d)| yi - lambda * d).collect();

        let mut x = vec![0.0; n];
        update_primal(&y, &z, lambda, &mut x);

        for (a, b) in x.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_dual_recovers_observations() {
        let n = 6;
        let y: Vec<f64> = vec![1.0, 2.0, -1.0, 0.5, 3.0, 2.2];
        let z = vec![0.0; n - 2];
        let mut x = vec![0.0; n];
        update_primal(&y, &z, 2.5, &mut x);
        assert_eq!(x, y);
    }
}
