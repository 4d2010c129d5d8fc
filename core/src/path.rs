use std::fmt;

use crate::error::{check_vertex, Result};
use crate::graph::{Graph, Vertex, Weight};

/// Tentative or final distance from the root.
///
/// Ordering puts every finite distance before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<Weight> {
        match *self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

/// Distances and predecessor links from a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    pub root: Option<Vertex>,
    pub distance: Vec<Distance>,
    pub parent: Vec<Option<Vertex>>,
}

impl ShortestPathResult {
    /// Vertices on the shortest path root → `target`, both ends included.
    /// Returns None if `target` is unreachable or out of range.
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        let root = self.root?;
        if !self.distance.get(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != root {
            current = self.parent[current]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Dense Dijkstra over the adjacency matrix.
///
/// Weights are expected to be nonnegative; negative weights give an
/// unspecified result. Each round selects the unvisited vertex with the
/// smallest finite distance (lowest index on ties) and stops as soon as no
/// such vertex remains.
///
/// An empty graph yields an empty result whatever `root` is.
pub fn shortest_paths(graph: &Graph, root: Vertex) -> Result<ShortestPathResult> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(ShortestPathResult {
            root: None,
            distance: Vec::new(),
            parent: Vec::new(),
        });
    }
    check_vertex(root, n)?;

    let matrix = graph.matrix();
    let mut distance = vec![Distance::Unreachable; n];
    let mut parent: Vec<Option<Vertex>> = vec![None; n];
    let mut visited = vec![false; n];
    distance[root] = Distance::ZERO;

    let mut settled = 0;
    for _ in 0..n - 1 {
        let next = (0..n)
            .filter(|&v| !visited[v])
            .filter_map(|v| distance[v].value().map(|d| (d, v)))
            .min();
        let Some((base, u)) = next else {
            break;
        };

        visited[u] = true;
        settled += 1;

        for (v, &weight) in matrix.row(u).iter().enumerate() {
            if visited[v] || weight == 0 {
                continue;
            }
            let candidate = Distance::Finite(base.saturating_add(weight));
            if candidate < distance[v] {
                distance[v] = candidate;
                parent[v] = Some(u);
            }
        }
    }

    tracing::debug!(
        root,
        settled,
        reachable = distance.iter().filter(|d| d.is_reachable()).count(),
        "shortest paths computed"
    );

    Ok(ShortestPathResult {
        root: Some(root),
        distance,
        parent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Orientation;
    use crate::testutil::{make_chain, make_cycle, unweighted, weighted};
    use crate::GraphError;

    fn finite(values: &[Weight]) -> Vec<Distance> {
        values.iter().map(|&d| Distance::Finite(d)).collect()
    }

    #[test]
    fn test_square_distances() {
        let g = weighted(
            4,
            Orientation::Undirected,
            &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4)],
        );
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance, finite(&[0, 1, 3, 4]));
        assert_eq!(sp.parent[0], None);
        assert_eq!(sp.parent[1], Some(0));
        assert_eq!(sp.parent[2], Some(1));
        // 0-3 directly and 0-1-2-3 both cost 4; the direct edge relaxed first
        assert_eq!(sp.parent[3], Some(0));
    }

    #[test]
    fn test_unreachable_stays_infinite() {
        let g = unweighted(3, Orientation::Undirected, &[(0, 1)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(
            sp.distance,
            vec![Distance::Finite(0), Distance::Finite(1), Distance::Unreachable]
        );
        assert_eq!(sp.parent, vec![None, Some(0), None]);
        assert_eq!(sp.path_to(2), None);
    }

    #[test]
    fn test_isolated_root_stops_early() {
        let g = unweighted(4, Orientation::Undirected, &[(1, 2), (2, 3)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance[0], Distance::ZERO);
        assert!(sp.distance[1..].iter().all(|d| !d.is_reachable()));
        assert!(sp.parent.iter().all(|p| p.is_none()));
    }

    #[test]
    fn test_directed_respects_direction() {
        let g = weighted(3, Orientation::Directed, &[(1, 0, 2), (0, 2, 5)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(
            sp.distance,
            vec![Distance::Finite(0), Distance::Unreachable, Distance::Finite(5)]
        );
        let from_one = shortest_paths(&g, 1).unwrap();
        assert_eq!(from_one.distance, finite(&[2, 0, 7]));
        assert_eq!(from_one.path_to(2), Some(vec![1, 0, 2]));
    }

    #[test]
    fn test_unweighted_uses_multiplicity_as_cost() {
        // Two parallel edges make the cell 2; the matrix is the cost source
        let g = unweighted(3, Orientation::Undirected, &[(0, 1), (0, 1), (1, 2)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance, finite(&[0, 2, 3]));
    }

    #[test]
    fn test_prefers_longer_cheaper_route() {
        let g = weighted(
            4,
            Orientation::Undirected,
            &[(0, 3, 10), (0, 1, 2), (1, 2, 2), (2, 3, 2)],
        );
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance[3], Distance::Finite(6));
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_chain_and_cycle() {
        let chain = shortest_paths(&make_chain(6, Orientation::Undirected), 0).unwrap();
        assert_eq!(chain.distance, finite(&[0, 1, 2, 3, 4, 5]));
        assert_eq!(chain.path_to(5), Some(vec![0, 1, 2, 3, 4, 5]));

        let cycle = shortest_paths(&make_cycle(6, Orientation::Undirected), 0).unwrap();
        assert_eq!(cycle.distance, finite(&[0, 1, 2, 3, 2, 1]));
    }

    #[test]
    fn test_monotone_along_parents() {
        let g = weighted(
            6,
            Orientation::Undirected,
            &[(0, 1, 7), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6)],
        );
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance, finite(&[0, 7, 9, 20, 26, 11]));
        for v in 1..6 {
            let p = sp.parent[v].unwrap();
            assert!(sp.distance[v] >= sp.distance[p]);
        }
    }

    #[test]
    fn test_path_to_root() {
        let g = make_chain(3, Orientation::Directed);
        let sp = shortest_paths(&g, 1).unwrap();
        assert_eq!(sp.path_to(1), Some(vec![1]));
        assert_eq!(sp.path_to(0), None);
        assert_eq!(sp.path_to(9), None);
    }

    #[test]
    fn test_root_out_of_range() {
        let g = make_chain(2, Orientation::Undirected);
        assert!(matches!(
            shortest_paths(&g, 2),
            Err(GraphError::InvalidVertexIndex { vertex: 2, vertex_count: 2 })
        ));
    }

    #[test]
    fn test_empty_graph_any_root() {
        let g = unweighted(0, Orientation::Directed, &[]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert!(sp.distance.is_empty());
        assert_eq!(sp.path_to(0), None);
    }

    #[test]
    fn test_single_vertex() {
        let g = unweighted(1, Orientation::Undirected, &[(0, 0)]);
        let sp = shortest_paths(&g, 0).unwrap();
        assert_eq!(sp.distance, vec![Distance::ZERO]);
    }

    #[test]
    fn test_distance_display_and_order() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Unreachable.to_string(), "inf");
        assert!(Distance::Finite(Weight::MAX) < Distance::Unreachable);
    }
}
