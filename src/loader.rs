//! CSV graph loader
//!
//! Turns two tabular files into a populated graph: a node file whose first
//! column is the identifier and an edge file whose first two columns are
//! the endpoint identifiers. Remaining columns become attributes keyed by
//! the header names, all values kept as text.

use crate::graph::{AttrMap, AttrValue, EdgeMode, Graph, GraphError};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a graph from CSV files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row in {file} has no identifier column")]
    MissingIdentifier { file: String },

    #[error(transparent)]
    Graph(#[from] GraphError<String>),
}

/// Build a graph from a node file and an edge file.
///
/// The edge mode is the caller's choice of `M`:
///
/// ```no_run
/// use graphrank::graph::DirectedGraph;
/// use graphrank::loader::read_graph_from_csv;
///
/// let graph: DirectedGraph<String> =
///     read_graph_from_csv("nodes.csv", "edges.csv")?;
/// # Ok::<(), graphrank::loader::LoadError>(())
/// ```
///
/// Rows are applied in file order, so duplicate rows or edges referencing
/// unknown nodes fail exactly as the equivalent `add_node` / `add_edge`
/// calls would. Ragged rows (cell count differing from the header) are
/// rejected by the reader.
pub fn read_graph_from_csv<M: EdgeMode>(
    node_path: impl AsRef<Path>,
    edge_path: impl AsRef<Path>,
) -> Result<Graph<String, M>, LoadError> {
    let mut graph = Graph::new();
    load_nodes(&mut graph, node_path.as_ref())?;
    load_edges(&mut graph, edge_path.as_ref())?;
    Ok(graph)
}

fn load_nodes<M: EdgeMode>(graph: &mut Graph<String, M>, path: &Path) -> Result<(), LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let attr_names: Vec<String> = header_tail(&mut reader, 1)?;

    let mut count = 0usize;
    for record in reader.records() {
        let record = record?;
        let id = field(&record, 0, path)?;
        graph.add_node_with(id, row_attrs(&attr_names, &record, 1))?;
        count += 1;
    }
    debug!(file = %path.display(), nodes = count, "loaded node file");
    Ok(())
}

fn load_edges<M: EdgeMode>(graph: &mut Graph<String, M>, path: &Path) -> Result<(), LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let attr_names: Vec<String> = header_tail(&mut reader, 2)?;

    let mut count = 0usize;
    for record in reader.records() {
        let record = record?;
        let source = field(&record, 0, path)?;
        let target = field(&record, 1, path)?;
        graph.add_edge_with(source, target, row_attrs(&attr_names, &record, 2))?;
        count += 1;
    }
    debug!(file = %path.display(), edges = count, "loaded edge file");
    Ok(())
}

/// Header column names past the identifier column(s): the attribute names.
fn header_tail(reader: &mut csv::Reader<std::fs::File>, id_columns: usize) -> Result<Vec<String>, LoadError> {
    Ok(reader
        .headers()?
        .iter()
        .skip(id_columns)
        .map(str::to_string)
        .collect())
}

fn field(record: &csv::StringRecord, index: usize, path: &Path) -> Result<String, LoadError> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or_else(|| LoadError::MissingIdentifier {
            file: path.display().to_string(),
        })
}

fn row_attrs(names: &[String], record: &csv::StringRecord, id_columns: usize) -> AttrMap {
    names
        .iter()
        .zip(record.iter().skip(id_columns))
        .map(|(name, value)| (name.clone(), AttrValue::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_directed_graph() {
        let nodes = write_csv("id,airport_name\n0,DTW\n1,AMS\n2,ORD\n");
        let edges = write_csv("src,dst,airline\n0,1,KLM\n1,0,Delta\n");

        let graph: DirectedGraph<String> =
            read_graph_from_csv(nodes.path(), edges.path()).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph
                .node(&"1".to_string())
                .unwrap()
                .attribute("airport_name")
                .unwrap()
                .as_str(),
            Some("AMS")
        );
        let edge = graph.edge(&"0".to_string(), &"1".to_string()).unwrap();
        assert_eq!(edge.attribute("airline").unwrap().as_str(), Some("KLM"));
        // directed: the file only declared 0->1 and 1->0, not 0->2
        assert!(graph.edge(&"0".to_string(), &"2".to_string()).is_err());
    }

    #[test]
    fn test_load_undirected_graph_mirrors_edges() {
        let nodes = write_csv("id,name\na,Alice\nb,Bob\n");
        let edges = write_csv("src,dst\na,b\n");

        let graph: UndirectedGraph<String> =
            read_graph_from_csv(nodes.path(), edges.path()).unwrap();

        assert_eq!(graph.degree(&"a".to_string()).unwrap(), 1);
        assert!(graph.edge(&"b".to_string(), &"a".to_string()).is_ok());
    }

    #[test]
    fn test_attributes_keyed_by_header_names() {
        let nodes = write_csv("id,city,country\n0,Detroit,USA\n");
        let edges = write_csv("src,dst\n");

        let graph: DirectedGraph<String> =
            read_graph_from_csv(nodes.path(), edges.path()).unwrap();

        let node = graph.node(&"0".to_string()).unwrap();
        assert_eq!(node.attribute("city").unwrap().as_str(), Some("Detroit"));
        assert_eq!(node.attribute("country").unwrap().as_str(), Some("USA"));
        assert_eq!(node.attributes().len(), 2);
    }

    #[test]
    fn test_duplicate_node_row_propagates_graph_error() {
        let nodes = write_csv("id\n0\n0\n");
        let edges = write_csv("src,dst\n");

        let result: Result<DirectedGraph<String>, _> =
            read_graph_from_csv(nodes.path(), edges.path());
        assert!(matches!(
            result,
            Err(LoadError::Graph(GraphError::DuplicateNode(_)))
        ));
    }

    #[test]
    fn test_edge_to_unknown_node_propagates_graph_error() {
        let nodes = write_csv("id\n0\n");
        let edges = write_csv("src,dst\n0,9\n");

        let result: Result<DirectedGraph<String>, _> =
            read_graph_from_csv(nodes.path(), edges.path());
        assert!(matches!(
            result,
            Err(LoadError::Graph(GraphError::NodeNotFound(_)))
        ));
    }

    #[test]
    fn test_edge_row_without_target_column() {
        // one-column edge file: rows match the header, so the csv reader
        // accepts them, but there is no target identifier to read
        let nodes = write_csv("id\n0\n");
        let edges = write_csv("src\n0\n");

        let result: Result<DirectedGraph<String>, _> =
            read_graph_from_csv(nodes.path(), edges.path());
        assert!(matches!(
            result,
            Err(LoadError::MissingIdentifier { .. })
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let nodes = write_csv("id,a,b\n0,only-one\n");
        let edges = write_csv("src,dst\n");

        let result: Result<DirectedGraph<String>, _> =
            read_graph_from_csv(nodes.path(), edges.path());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let edges = write_csv("src,dst\n");
        let result: Result<DirectedGraph<String>, _> =
            read_graph_from_csv("/nonexistent/nodes.csv", edges.path());
        assert!(result.is_err());
    }
}
