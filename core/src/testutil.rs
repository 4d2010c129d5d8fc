//! Small graph builders shared by the unit tests.

use crate::graph::{EdgeRecord, Graph, Orientation, Vertex, Weight};

pub fn weighted(n: usize, orientation: Orientation, edges: &[(Vertex, Vertex, Weight)]) -> Graph {
    let records = edges
        .iter()
        .map(|&(s, t, w)| EdgeRecord::weighted(s, t, w));
    Graph::build(n, orientation, true, records).unwrap()
}

pub fn unweighted(n: usize, orientation: Orientation, edges: &[(Vertex, Vertex)]) -> Graph {
    let records = edges.iter().map(|&(s, t)| EdgeRecord::new(s, t));
    Graph::build(n, orientation, false, records).unwrap()
}

/// 0 - 1 - ... - (n-1), every edge weight 1.
pub fn make_chain(n: usize, orientation: Orientation) -> Graph {
    let edges: Vec<(Vertex, Vertex)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    unweighted(n, orientation, &edges)
}

/// Ring 0 - 1 - ... - (n-1) - 0.
pub fn make_cycle(n: usize, orientation: Orientation) -> Graph {
    let edges: Vec<(Vertex, Vertex)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    unweighted(n, orientation, &edges)
}

/// Hub 0 with edges to `leaves` leaves 1..=leaves.
pub fn make_star(leaves: usize, orientation: Orientation) -> Graph {
    let edges: Vec<(Vertex, Vertex)> = (1..=leaves).map(|i| (0, i)).collect();
    unweighted(leaves + 1, orientation, &edges)
}
