//! graph-engine-core: small in-memory graph engine.
//!
//! A pure Rust library that holds a graph as an edge sequence plus a dense
//! adjacency matrix, converts between matrix and adjacency-list views,
//! computes vertex degrees, grows Prim-style spanning trees and runs dense
//! Dijkstra. Every algorithm borrows the graph immutably and returns an
//! owned result.
//!
//! File parsing is available through [`format`]; everything else (tables,
//! command-line orchestration) lives in the `graph-engine-cli` crate.

mod convert;
mod degree;
mod error;
pub mod format;
mod graph;
mod mst;
mod path;

#[cfg(test)]
mod testutil;

pub use convert::{edges_to_list, list_to_matrix, matrix_to_list, AdjacencyList, ListEntry};
pub use degree::{compute_degrees, degree_ranking, DegreeReport, VertexDegree};
pub use error::{GraphError, Result};
pub use graph::{AdjacencyMatrix, Edge, EdgeRecord, Graph, Orientation, Vertex, Weight};
pub use mst::{minimum_spanning_tree, MstResult};
pub use path::{shortest_paths, Distance, ShortestPathResult};
