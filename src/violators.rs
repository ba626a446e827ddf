//! KKT violator location & scoring.

fn is_pinned_up(v: f64) -> bool {
    v == 1.0
}
fn is_pinned_down(v: f64) -> bool {
    v == -1.0
}

/// Scan the partition `z` against `Dx` and populate `vio_index`/`vio_fitness`
/// with every KKT violator, plus the identity permutation in `vio_sort`.
/// Returns `n_vio`; only `vio_index[..n_vio]`, `vio_fitness[..n_vio]`,
/// `vio_sort[..n_vio]` are meaningful on return.
///
/// Classification:
/// - pinned at `+1` is a violator when `(Dx)_i < 0`;
/// - pinned at `-1` is a violator when `(Dx)_i > 0`;
/// - active (`|z_i| < 1` by the exact-equality partition test) is a
///   violator when the banded solve pushed it outside `[-1, 1]`.
///
/// Fitness is `max(λ|(Dx)_i|, 1)` for pinned violators and
/// `max(λ|(Dx)_i|, |z_i|)` for active violators — the floor guarantees any
/// active→inactive move outranks the weakest inactive→active move.
pub(crate) fn locate_violators(
    z: &[f64],
    dx: &[f64],
    lambda: f64,
    vio_index: &mut [usize],
    vio_fitness: &mut [f64],
    vio_sort: &mut [usize],
) -> usize {
    let m = z.len();
    debug_assert_eq!(dx.len(), m);

    let mut n_vio = 0;
    for i in 0..m {
        let zi = z[i];
        let dxi = dx[i];

        let (is_violator, fitness) = if is_pinned_up(zi) {
            (dxi < 0.0, (lambda * dxi.abs()).max(1.0))
        } else if is_pinned_down(zi) {
            (dxi > 0.0, (lambda * dxi.abs()).max(1.0))
        } else {
            (zi.abs() > 1.0, (lambda * dxi.abs()).max(zi.abs()))
        };

        if is_violator {
            vio_index[n_vio] = i;
            vio_fitness[n_vio] = fitness;
            vio_sort[n_vio] = n_vio;
            n_vio += 1;
        }
    }
    n_vio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_up_with_negative_slope_is_a_violator() {
        let z = vec![1.0, 0.5];
        let dx = vec![-2.0, 0.1];
        let mut idx = vec![0usize; 2];
        let mut fit = vec![0.0; 2];
        let mut sort = vec![0usize; 2];
        let n = locate_violators(&z, &dx, 1.0, &mut idx, &mut fit, &mut sort);
        assert_eq!(n, 1);
        assert_eq!(idx[0], 0);
        assert_eq!(fit[0], 2.0);
        assert_eq!(sort[0], 0);
    }

    #[test]
    fn pinned_up_with_nonnegative_slope_is_not_a_violator() {
        let z = vec![1.0];
        let dx = vec![0.0];
        let mut idx = vec![0usize; 1];
        let mut fit = vec![0.0; 1];
        let mut sort = vec![0usize; 1];
        assert_eq!(locate_violators(&z, &dx, 1.0, &mut idx, &mut fit, &mut sort), 0);
    }

    #[test]
    fn pinned_down_with_positive_slope_is_a_violator() {
        let z = vec![-1.0];
        let dx = vec![3.0];
        let mut idx = vec![0usize; 1];
        let mut fit = vec![0.0; 1];
        let mut sort = vec![0usize; 1];
        let n = locate_violators(&z, &dx, 2.0, &mut idx, &mut fit, &mut sort);
        assert_eq!(n, 1);
        assert_eq!(fit[0], 6.0);
    }

    #[test]
    fn active_out_of_box_is_a_violator_with_floor_from_z() {
        let z = vec![1.4];
        let dx = vec![0.01];
        let mut idx = vec![0usize; 1];
        let mut fit = vec![0.0; 1];
        let mut sort = vec![0usize; 1];
        let n = locate_violators(&z, &dx, 1.0, &mut idx, &mut fit, &mut sort);
        assert_eq!(n, 1);
        assert_eq!(fit[0], 1.4);
    }

    #[test]
    fn fitness_floor_of_one_applies_to_pinned_violators() {
        let z = vec![1.0];
        let dx = vec![-1e-6];
        let mut idx = vec![0usize; 1];
        let mut fit = vec![0.0; 1];
        let mut sort = vec![0usize; 1];
        locate_violators(&z, &dx, 1.0, &mut idx, &mut fit, &mut sort);
        assert_eq!(fit[0], 1.0);
    }

    #[test]
    fn in_box_active_coordinate_is_never_a_violator() {
        let z = vec![0.3, -0.9, 0.0];
        let dx = vec![5.0, -5.0, 5.0];
        let mut idx = vec![0usize; 3];
        let mut fit = vec![0.0; 3];
        let mut sort = vec![0usize; 3];
        assert_eq!(locate_violators(&z, &dx, 1.0, &mut idx, &mut fit, &mut sort), 0);
    }
}
