use crate::graph::Vertex;

/// Errors surfaced by graph construction, conversion and the algorithms.
///
/// Topology conditions (disconnection, unreachable vertices) are not errors:
/// they show up as data in the results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id (edge endpoint, list entry or root) outside `[0, vertex_count)`.
    #[error("invalid vertex index {vertex}: graph has {vertex_count} vertices")]
    InvalidVertexIndex { vertex: Vertex, vertex_count: usize },

    /// Malformed line in the textual graph format.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The header declared a different number of edges than the body holds.
    #[error("edge count mismatch: header declares {expected}, found {found}")]
    EdgeCountMismatch { expected: usize, found: usize },

    /// The dense `n × n` matrix for this many vertices cannot be allocated.
    #[error("adjacency matrix for {vertex_count} vertices does not fit in memory")]
    MatrixTooLarge { vertex_count: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Fail fast when `vertex` is not a valid index for a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertexIndex {
            vertex,
            vertex_count,
        })
    }
}
