//! Conversions between the dense matrix, the edge sequence and the sparse
//! adjacency list.
//!
//! The two list builders do not agree on ordering: [`matrix_to_list`] sorts
//! each vertex's entries by neighbor index, while [`edges_to_list`] follows
//! edge insertion order. The spanning tree builder depends on the latter.

use crate::error::{check_vertex, Result};
use crate::graph::{AdjacencyMatrix, Graph, Vertex, Weight};

/// One `(neighbor, weight)` pair in a vertex's adjacency sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry {
    pub neighbor: Vertex,
    pub weight: Weight,
}

/// Sparse per-vertex adjacency sequences, indexed by vertex id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<ListEntry>>,
}

impl AdjacencyList {
    /// A list with `vertex_count` empty sequences.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Append `(neighbor, weight)` to `vertex`'s sequence, growing the list
    /// if `vertex` is past the end.
    pub fn push(&mut self, vertex: Vertex, neighbor: Vertex, weight: Weight) {
        if vertex >= self.lists.len() {
            self.lists.resize_with(vertex + 1, Vec::new);
        }
        self.lists[vertex].push(ListEntry { neighbor, weight });
    }

    /// Entries for `vertex`, empty when the vertex has none or is unknown.
    pub fn neighbors(&self, vertex: Vertex) -> &[ListEntry] {
        self.lists.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// `(vertex, entries)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[ListEntry])> {
        self.lists.iter().enumerate().map(|(v, l)| (v, l.as_slice()))
    }

    /// Total number of entries across all vertices.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(|l| l.len()).sum()
    }
}

/// Scan the matrix row by row; every nonzero cell becomes an entry.
pub fn matrix_to_list(graph: &Graph) -> AdjacencyList {
    let matrix = graph.matrix();
    let mut list = AdjacencyList::new(graph.vertex_count());

    for (i, row) in matrix.rows().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            if weight != 0 {
                list.push(i, j, weight);
            }
        }
    }

    list
}

/// Walk the edge sequence in insertion order. Undirected edges are recorded
/// on both endpoints, so an undirected self-loop appears twice.
pub fn edges_to_list(graph: &Graph) -> AdjacencyList {
    let mut list = AdjacencyList::new(graph.vertex_count());

    for edge in graph.edges() {
        list.push(edge.source, edge.target, edge.weight);
        if !graph.is_directed() {
            list.push(edge.target, edge.source, edge.weight);
        }
    }

    list
}

/// Rebuild a dense matrix from a list. Later entries for the same cell
/// overwrite earlier ones.
pub fn list_to_matrix(list: &AdjacencyList, vertex_count: usize) -> Result<AdjacencyMatrix> {
    let mut matrix = AdjacencyMatrix::new(vertex_count)?;

    for (vertex, entries) in list.iter() {
        if entries.is_empty() {
            continue;
        }
        check_vertex(vertex, vertex_count)?;
        for entry in entries {
            check_vertex(entry.neighbor, vertex_count)?;
            matrix.set(vertex, entry.neighbor, entry.weight);
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Orientation;
    use crate::testutil::{make_cycle, make_star, unweighted, weighted};
    use crate::GraphError;

    fn pairs(list: &AdjacencyList, v: Vertex) -> Vec<(Vertex, Weight)> {
        list.neighbors(v)
            .iter()
            .map(|e| (e.neighbor, e.weight))
            .collect()
    }

    #[test]
    fn test_matrix_to_list_sorted_by_neighbor() {
        let g = weighted(4, Orientation::Undirected, &[(0, 3, 4), (0, 1, 1), (0, 2, 9)]);
        let list = matrix_to_list(&g);
        assert_eq!(pairs(&list, 0), vec![(1, 1), (2, 9), (3, 4)]);
        assert_eq!(pairs(&list, 3), vec![(0, 4)]);
    }

    #[test]
    fn test_edges_to_list_follows_insertion_order() {
        let g = weighted(4, Orientation::Undirected, &[(0, 3, 4), (0, 1, 1), (0, 2, 9)]);
        let list = edges_to_list(&g);
        assert_eq!(pairs(&list, 0), vec![(3, 4), (1, 1), (2, 9)]);
        assert_eq!(pairs(&list, 2), vec![(0, 9)]);
    }

    #[test]
    fn test_list_builders_may_disagree_on_order() {
        let g = weighted(3, Orientation::Undirected, &[(0, 2, 5), (0, 1, 5)]);
        assert_ne!(matrix_to_list(&g), edges_to_list(&g));
    }

    #[test]
    fn test_edges_to_list_directed_only_forward() {
        let g = unweighted(3, Orientation::Directed, &[(0, 1), (2, 1)]);
        let list = edges_to_list(&g);
        assert_eq!(pairs(&list, 0), vec![(1, 1)]);
        assert!(list.neighbors(1).is_empty());
        assert_eq!(pairs(&list, 2), vec![(1, 1)]);
    }

    #[test]
    fn test_edges_to_list_keeps_parallel_edges() {
        // The matrix collapses these into one cell; the edge list does not
        let g = weighted(2, Orientation::Directed, &[(0, 1, 7), (0, 1, 2)]);
        assert_eq!(pairs(&edges_to_list(&g), 0), vec![(1, 7), (1, 2)]);
        assert_eq!(pairs(&matrix_to_list(&g), 0), vec![(1, 2)]);
    }

    #[test]
    fn test_undirected_self_loop_listed_twice() {
        let g = unweighted(2, Orientation::Undirected, &[(1, 1)]);
        assert_eq!(pairs(&edges_to_list(&g), 1), vec![(1, 1), (1, 1)]);
        assert_eq!(pairs(&matrix_to_list(&g), 1), vec![(1, 1)]);
    }

    #[test]
    fn test_unweighted_multiplicity_in_list() {
        let g = unweighted(2, Orientation::Undirected, &[(0, 1), (0, 1)]);
        assert_eq!(pairs(&matrix_to_list(&g), 0), vec![(1, 2)]);
    }

    #[test]
    fn test_round_trip_weighted_undirected() {
        let g = weighted(
            5,
            Orientation::Undirected,
            &[(0, 1, 3), (1, 2, 1), (2, 2, 8), (4, 0, 2), (3, 1, 6)],
        );
        let m = list_to_matrix(&matrix_to_list(&g), g.vertex_count()).unwrap();
        assert_eq!(&m, g.matrix());
    }

    #[test]
    fn test_round_trip_unweighted_directed_with_loops() {
        let g = unweighted(4, Orientation::Directed, &[(0, 1), (0, 1), (3, 3), (2, 0)]);
        let m = list_to_matrix(&matrix_to_list(&g), g.vertex_count()).unwrap();
        assert_eq!(&m, g.matrix());
    }

    #[test]
    fn test_round_trip_cycle_and_star() {
        for g in [
            make_cycle(7, Orientation::Undirected),
            make_cycle(7, Orientation::Directed),
            make_star(12, Orientation::Undirected),
        ] {
            let m = list_to_matrix(&matrix_to_list(&g), g.vertex_count()).unwrap();
            assert_eq!(&m, g.matrix());
        }
    }

    #[test]
    fn test_round_trip_empty_graph() {
        let g = unweighted(0, Orientation::Undirected, &[]);
        let list = matrix_to_list(&g);
        assert_eq!(list.vertex_count(), 0);
        assert_eq!(list_to_matrix(&list, 0).unwrap(), AdjacencyMatrix::new(0).unwrap());
    }

    #[test]
    fn test_list_to_matrix_rejects_out_of_range_neighbor() {
        let mut list = AdjacencyList::new(2);
        list.push(0, 5, 1);
        assert_eq!(
            list_to_matrix(&list, 2).unwrap_err(),
            GraphError::InvalidVertexIndex {
                vertex: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_list_to_matrix_rejects_out_of_range_vertex() {
        let mut list = AdjacencyList::new(1);
        list.push(3, 0, 1);
        assert!(matches!(
            list_to_matrix(&list, 2),
            Err(GraphError::InvalidVertexIndex { vertex: 3, .. })
        ));
    }

    #[test]
    fn test_list_to_matrix_rejects_oversized_vertex_count() {
        let list = AdjacencyList::new(0);
        assert!(matches!(
            list_to_matrix(&list, usize::MAX),
            Err(GraphError::MatrixTooLarge { .. })
        ));
    }

    #[test]
    fn test_entry_count() {
        let g = make_star(5, Orientation::Undirected);
        assert_eq!(edges_to_list(&g).entry_count(), 10);
        assert_eq!(matrix_to_list(&g).entry_count(), 10);
    }
}
