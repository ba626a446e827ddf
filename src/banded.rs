//! Banded quindiagonal subproblem solve.
//!
//! `D_A D_Aᵀ` restricted to the active set is symmetric positive-definite
//! with bandwidth 2 (five nonzero diagonals total: main + two sub/super on
//! each side). This module owns the buffers for that system and an inlined
//! Cholesky factorization + triangular solve — no external LAPACK
//! dependency (see `DESIGN.md`).
//!
//! Storage: `diag[c]`, `off1[c] = A[c, c-1]`, `off2[c] = A[c, c-2]` for the
//! `k x k` active-set system, indexed by position in the active-index list
//! (not by original dual index). All three arrays are pre-allocated to
//! capacity `n - 2` once and reused across iterations; `build` only
//! touches the first `k` entries.

/// Owns the scratch buffers for one banded quindiagonal solve.
pub(crate) struct BandedSolve {
    k: usize,
    diag: Vec<f64>,
    off1: Vec<f64>,
    off2: Vec<f64>,
    rhs: Vec<f64>,
}

impl BandedSolve {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        BandedSolve {
            k: 0,
            diag: vec![0.0; cap],
            off1: vec![0.0; cap],
            off2: vec![0.0; cap],
            rhs: vec![0.0; cap],
        }
    }

    pub(crate) fn k(&self) -> usize {
        self.k
    }

    pub(crate) fn rhs_mut(&mut self) -> &mut [f64] {
        &mut self.rhs[..self.k]
    }

    pub(crate) fn solution(&self) -> &[f64] {
        &self.rhs[..self.k]
    }

    /// Assemble the `k x k` banded SPD system from the list of active
    /// original dual indices (strictly increasing). Per-row entries follow
    /// the row-norm identity: main diagonal is always `6.0`
    /// (`‖D_i·‖² = 1 + 4 + 1`); the off-diagonals depend only on the gap
    /// between consecutive active indices.
    pub(crate) fn build(&mut self, active: &[usize]) {
        let k = active.len();
        self.k = k;
        for c in 0..k {
            self.diag[c] = 6.0;
            self.off1[c] = if c >= 1 {
                match active[c] - active[c - 1] {
                    1 => -4.0,
                    2 => 1.0,
                    _ => 0.0,
                }
            } else {
                0.0
            };
            self.off2[c] = if c >= 2 {
                if active[c] - active[c - 2] == 2 {
                    1.0
                } else {
                    0.0
                }
            } else {
                0.0
            };
        }
    }

    /// Factorize in place (`A = L Lᵀ`, `L` lower-banded with bandwidth 2)
    /// and solve `A x = rhs` in place via forward/back substitution.
    ///
    /// Returns `Err(c)` naming the first column at which positive
    /// definiteness was lost (radicand `<= 0`); the factorization and
    /// solve still run to completion with the radicand clamped to a small
    /// positive floor, so `rhs` always holds a usable (if degraded) `z_A`
    /// on return — the driver must not abort on this error, only log it.
    pub(crate) fn solve(&mut self) -> Result<(), usize> {
        let k = self.k;
        if k == 0 {
            return Ok(());
        }
        let mut first_failure = None;

        for c in 0..k {
            let radicand = self.diag[c] - self.off1[c] * self.off1[c] - self.off2[c] * self.off2[c];
            let safe = if radicand > 1e-300 {
                radicand
            } else {
                first_failure.get_or_insert(c);
                1e-12
            };
            self.diag[c] = safe.sqrt();

            if c + 1 < k {
                let raw = self.off1[c + 1];
                self.off1[c + 1] = (raw - self.off2[c + 1] * self.off1[c]) / self.diag[c];
            }
            if c + 2 < k {
                let raw = self.off2[c + 2];
                self.off2[c + 2] = raw / self.diag[c];
            }
        }

        // Forward substitution: L y = b, result written back into rhs.
        for c in 0..k {
            let mut s = self.rhs[c];
            if c >= 1 {
                s -= self.off1[c] * self.rhs[c - 1];
            }
            if c >= 2 {
                s -= self.off2[c] * self.rhs[c - 2];
            }
            self.rhs[c] = s / self.diag[c];
        }

        // Back substitution: Lᵀ x = y, high-to-low so later entries are
        // already finalized when needed.
        for c in (0..k).rev() {
            let mut s = self.rhs[c];
            if c + 1 < k {
                s -= self.off1[c + 1] * self.rhs[c + 1];
            }
            if c + 2 < k {
                s -= self.off2[c + 2] * self.rhs[c + 2];
            }
            self.rhs[c] = s / self.diag[c];
        }

        match first_failure {
            Some(c) => Err(c),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dense reference solve via naive Gauss-Jordan, for cross-checking the
    /// banded Cholesky on small systems.
    fn dense_solve(active: &[usize], rhs: &[f64]) -> Vec<f64> {
        let k = active.len();
        let mut a = vec![vec![0.0_f64; k]; k];
        for c in 0..k {
            a[c][c] = 6.0;
            if c >= 1 {
                let v = match active[c] - active[c - 1] {
                    1 => -4.0,
                    2 => 1.0,
                    _ => 0.0,
                };
                a[c][c - 1] = v;
                a[c - 1][c] = v;
            }
            if c >= 2 && active[c] - active[c - 2] == 2 {
                a[c][c - 2] = 1.0;
                a[c - 2][c] = 1.0;
            }
        }

        // Augment and row-reduce.
        let mut aug: Vec<Vec<f64>> = a
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut r = row.clone();
                r.push(rhs[i]);
                r
            })
            .collect();
        for col in 0..k {
            let pivot = aug[col][col];
            for v in aug[col].iter_mut() {
                *v /= pivot;
            }
            for row in 0..k {
                if row == col {
                    continue;
                }
                let factor = aug[row][col];
                for j in 0..=k {
                    aug[row][j] -= factor * aug[col][j];
                }
            }
        }
        aug.iter().map(|row| row[k]).collect()
    }

    #[test]
    fn all_active_consecutive_matches_dense() {
        let active: Vec<usize> = (0..6).collect();
        let rhs = vec![1.0, -2.0, 3.0, 0.5, -1.5, 2.0];

        let mut banded = BandedSolve::with_capacity(6);
        banded.build(&active);
        banded.rhs_mut().copy_from_slice(&rhs);
        assert!(banded.solve().is_ok());

        let expected = dense_solve(&active, &rhs);
        for (a, b) in banded.solution().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-8, "{a} vs {b}");
        }
    }

    #[test]
    fn sparse_partition_matches_dense() {
        let active = vec![0usize, 2, 3, 7, 8, 9, 15];
        let rhs = vec![1.0, 2.0, -1.0, 0.3, 0.1, -0.4, 2.2];

        let mut banded = BandedSolve::with_capacity(active.len());
        banded.build(&active);
        banded.rhs_mut().copy_from_slice(&rhs);
        assert!(banded.solve().is_ok());

        let expected = dense_solve(&active, &rhs);
        for (a, b) in banded.solution().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn single_active_index() {
        let active = vec![4usize];
        let mut banded = BandedSolve::with_capacity(1);
        banded.build(&active);
        banded.rhs_mut().copy_from_slice(&[12.0]);
        assert!(banded.solve().is_ok());
        assert!((banded.solution()[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_active_set_is_noop() {
        let mut banded = BandedSolve::with_capacity(4);
        banded.build(&[]);
        assert_eq!(banded.k(), 0);
        assert!(banded.solve().is_ok());
        assert!(banded.solution().is_empty());
    }

    #[test]
    fn reused_buffers_across_shrinking_partitions() {
        let mut banded = BandedSolve::with_capacity(8);

        let active1: Vec<usize> = (0..8).collect();
        banded.build(&active1);
        banded.rhs_mut().copy_from_slice(&[1.0; 8]);
        assert!(banded.solve().is_ok());

        let active2 = vec![1usize, 2, 5];
        banded.build(&active2);
        banded.rhs_mut().copy_from_slice(&[3.0, -1.0, 0.5]);
        assert!(banded.solve().is_ok());
        let expected = dense_solve(&active2, &[3.0, -1.0, 0.5]);
        for (a, b) in banded.solution().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-8);
        }
    }
}
