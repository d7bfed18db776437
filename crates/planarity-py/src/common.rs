use planarity::{Graph, GraphError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn graph_from_py(num_nodes: usize, edges: Vec<(usize, usize)>) -> PyResult<Graph> {
    Graph::from_edges(num_nodes, edges).map_err(map_graph_err)
}

pub fn map_graph_err(err: GraphError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
