//! Proportional violator reassignment.

/// Stable-sort the first `n_vio` entries of `vio_sort` so that
/// `vio_fitness[vio_sort[k]]` is descending, then flip the top
/// `n_reassign = max(⌊p·n_vio + 0.5⌋, 1)` violators across the partition
/// boundary. Returns `n_reassign`.
///
/// The sort closes over `vio_fitness` as a local borrow — never a
/// process-wide global — so the solver stays reentrant.
pub(crate) fn reassign_violators(
    z: &mut [f64],
    vio_index: &[usize],
    vio_fitness: &[f64],
    vio_sort: &mut [usize],
    n_vio: usize,
    p: f64,
) -> usize {
    if n_vio == 0 {
        return 0;
    }

    let sort_slice = &mut vio_sort[..n_vio];
    sort_slice.sort_by(|&a, &b| vio_fitness[b].partial_cmp(&vio_fitness[a]).unwrap());

    let n_reassign = (((p * n_vio as f64) + 0.5).floor() as usize).clamp(1, n_vio);

    for &k in &sort_slice[..n_reassign] {
        let i = vio_index[k];
        let zi = z[i];
        if zi == 1.0 || zi == -1.0 {
            z[i] = 0.0;
        } else if zi > 1.0 {
            z[i] = 1.0;
        } else if zi < -1.0 {
            z[i] = -1.0;
        }
    }

    n_reassign
}
