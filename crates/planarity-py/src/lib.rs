//! PyO3 bindings for the `planarity` crate.
//!
//! Notes
//! - Graphs cross the boundary as a node count plus a list of `(u, v)` pairs;
//!   ids must lie in `0..num_nodes`, otherwise a `ValueError` is raised.
//! - Only verdicts and DFS summaries are bound; graph construction helpers
//!   stay on the Python side.

use planarity::{Algorithm, LeftRightPlanarityTest};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

mod common;

use common::graph_from_py;

/// Return True iff the graph with `num_nodes` nodes and the given edges is planar.
#[pyfunction]
fn is_planar(num_nodes: usize, edges: Vec<(usize, usize)>) -> PyResult<bool> {
    let g = graph_from_py(num_nodes, edges)?;
    Ok(planarity::is_planar(&g))
}

/// Run the test and return `(planar, roots)`, one DFS root per component.
#[pyfunction]
fn planarity_summary(
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
) -> PyResult<(bool, Vec<usize>)> {
    let g = graph_from_py(num_nodes, edges)?;
    let mut test = LeftRightPlanarityTest::new(&g);
    test.run();
    let to_py = |err: planarity::PlanarityError| PyRuntimeError::new_err(err.to_string());
    let planar = test.is_planar().map_err(to_py)?;
    let roots = test.roots().map_err(to_py)?.to_vec();
    Ok((planar, roots))
}

#[pymodule]
fn planarity_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_planar, m)?)?;
    m.add_function(wrap_pyfunction!(planarity_summary, m)?)?;
    m.add("__version__", planarity::VERSION)?;
    Ok(())
}
