use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::{SolverConfig, Status, TrendFilterSolver};

const CONTIGUOUS_ERR: &str = "array must be C-contiguous; call numpy.ascontiguousarray() before passing";

/// Python-facing wrapper around [`TrendFilterSolver`].
#[pyclass]
pub struct PySolver {
    inner: TrendFilterSolver,
}

#[pymethods]
impl PySolver {
    #[new]
    #[pyo3(signature = (n, lambda_, p_init=0.5, m=5, delta_s=0.8, delta_e=1.1, maxiter=500))]
    fn new(n: usize, lambda_: f64, p_init: f64, m: usize, delta_s: f64, delta_e: f64, maxiter: usize) -> PyResult<Self> {
        let config = SolverConfig {
            p_init,
            m,
            delta_s,
            delta_e,
            maxiter,
            tol: 1e-6,
        };
        let inner = TrendFilterSolver::try_new(n, lambda_, config)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(PySolver { inner })
    }

    /// Solve for the given observations. Returns `True` on convergence.
    fn solve(&mut self, y: PyReadonlyArray1<f64>) -> PyResult<bool> {
        let slice = y.as_slice().map_err(|_| pyo3::exceptions::PyValueError::new_err(CONTIGUOUS_ERR))?;
        Ok(self.inner.solve(slice) == Status::Converged)
    }

    /// Get the primal solution `x`.
    fn get_solution<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice(py, self.inner.solution())
    }

    /// Get the dual iterate `z`.
    fn get_dual<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice(py, self.inner.dual())
    }

    /// Problem size this solver was constructed for.
    fn n(&self) -> usize {
        self.inner.n()
    }
}

/// Register the Python module.
#[pymodule]
fn _solver(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolver>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
