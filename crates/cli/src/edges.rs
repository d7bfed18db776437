//! Edge-list CSV I/O.
//!
//! An edge list has a header row and two integer columns naming the endpoints
//! of each edge. Extra columns are ignored.

use anyhow::{bail, Context, Result};
use planarity::api::{Graph, NodeId};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read `(source, target)` pairs from the named columns of a CSV file.
pub fn read_edge_list(
    path: &Path,
    source_col: &str,
    target_col: &str,
) -> Result<Vec<(NodeId, NodeId)>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col(source_col), col(target_col)])
        .collect()
        .with_context(|| {
            format!(
                "reading columns {source_col},{target_col} of {}",
                path.display()
            )
        })?;
    let sources = node_ids(&df, source_col)?;
    let targets = node_ids(&df, target_col)?;
    Ok(sources.into_iter().zip(targets).collect())
}

fn node_ids(df: &DataFrame, name: &str) -> Result<Vec<NodeId>> {
    let ids = df.column(name)?.cast(&DataType::Int64)?;
    ids.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| match v {
            Some(x) if x >= 0 => Ok(x as NodeId),
            Some(x) => bail!("row {row}: negative node id {x} in column {name}"),
            None => bail!("row {row}: missing node id in column {name}"),
        })
        .collect()
}

/// Node count implied by an edge list: one more than the largest id.
/// `None` if that count does not fit in a `usize`.
pub fn implied_nodes(edges: &[(NodeId, NodeId)]) -> Option<usize> {
    edges
        .iter()
        .map(|&(a, b)| a.max(b))
        .max()
        .map_or(Some(0), |max| max.checked_add(1))
}

/// Write the edges of `g` as a `source,target` CSV.
pub fn write_edge_list(path: &Path, g: &Graph) -> Result<()> {
    let sources: Vec<u64> = g.edges().iter().map(|e| e.u as u64).collect();
    let targets: Vec<u64> = g.edges().iter().map(|e| e.v as u64).collect();
    let mut df = polars::df!("source" => sources, "target" => targets)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planarity::api::{complete_bipartite, is_planar};
    use tempfile::tempdir;

    #[test]
    fn edge_list_survives_a_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("k33.csv");
        let g = complete_bipartite(3, 3);
        write_edge_list(&path, &g).unwrap();
        let edges = read_edge_list(&path, "source", "target").unwrap();
        assert_eq!(edges.len(), 9);
        assert_eq!(implied_nodes(&edges), Some(6));
        let back = Graph::from_edges(6, edges).unwrap();
        assert!(!is_planar(&back));
    }

    #[test]
    fn custom_columns_and_extra_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri.csv");
        std::fs::write(&path, "weight,a,b\n1.5,0,1\n2.0,1,2\n0.1,2,0\n").unwrap();
        let edges = read_edge_list(&path, "a", "b").unwrap();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn negative_ids_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "source,target\n0,-1\n").unwrap();
        let err = read_edge_list(&path, "source", "target").unwrap_err();
        assert!(err.to_string().contains("negative node id"));
    }

    #[test]
    fn implied_nodes_of_empty_list_is_zero() {
        assert_eq!(implied_nodes(&[]), Some(0));
        assert_eq!(implied_nodes(&[(4, 2)]), Some(5));
        assert_eq!(implied_nodes(&[(0, usize::MAX)]), None);
    }
}
