//! Prim-style spanning tree grown from a single root.
//!
//! The frontier is an insertion-ordered `Vec` of crossing edges scanned
//! linearly, not a heap. Among equal-weight candidates the one inserted
//! first wins, which is visible in the resulting tree whenever the graph
//! has ties.

use crate::convert::{edges_to_list, AdjacencyList};
use crate::error::{check_vertex, Result};
use crate::graph::{Graph, Vertex, Weight};

/// Parent links and total weight of the tree grown from `root`.
///
/// Vertices outside the root's component keep `parent == None` and do not
/// contribute to `total_weight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    pub root: Option<Vertex>,
    pub parent: Vec<Option<Vertex>>,
    pub total_weight: Weight,
    /// Tree edges `(parent, child, weight)` in the order they were added.
    tree_edges: Vec<(Vertex, Vertex, Weight)>,
}

impl MstResult {
    fn empty() -> Self {
        Self {
            root: None,
            parent: Vec::new(),
            total_weight: 0,
            tree_edges: Vec::new(),
        }
    }

    pub fn edges(&self) -> &[(Vertex, Vertex, Weight)] {
        &self.tree_edges
    }

    /// Number of vertices in the tree, root included.
    pub fn reached(&self) -> usize {
        match self.root {
            Some(_) => self.tree_edges.len() + 1,
            None => 0,
        }
    }

    /// True when every vertex of the graph made it into the tree.
    pub fn is_spanning(&self) -> bool {
        self.reached() == self.parent.len()
    }
}

/// Candidate crossing edge: `source` is in the tree, `target` was outside it
/// when the edge was pushed.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    source: Vertex,
    target: Vertex,
    weight: Weight,
}

impl FrontierEdge {
    fn joins(&self, a: Vertex, b: Vertex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

struct Frontier {
    edges: Vec<FrontierEdge>,
}

impl Frontier {
    fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Push every entry of `vertex`'s list that leads outside the tree. At
    /// most one edge per unordered vertex pair is held; the first one stays.
    fn expand(&mut self, list: &AdjacencyList, vertex: Vertex, visited: &[bool]) {
        for entry in list.neighbors(vertex) {
            if visited[entry.neighbor] {
                continue;
            }
            if self.edges.iter().any(|e| e.joins(vertex, entry.neighbor)) {
                continue;
            }
            self.edges.push(FrontierEdge {
                source: vertex,
                target: entry.neighbor,
                weight: entry.weight,
            });
        }
    }

    /// Remove and return the lightest edge into an unvisited vertex. Strict
    /// comparison keeps the leftmost edge on ties.
    fn extract_min(&mut self, visited: &[bool]) -> Option<FrontierEdge> {
        let mut best: Option<(usize, Weight)> = None;
        for (idx, edge) in self.edges.iter().enumerate() {
            if visited[edge.target] {
                continue;
            }
            match best {
                Some((_, w)) if edge.weight >= w => {}
                _ => best = Some((idx, edge.weight)),
            }
        }
        best.map(|(idx, _)| self.edges.remove(idx))
    }

    /// Drop edges that no longer cross the cut because `vertex` joined the tree.
    fn retire(&mut self, vertex: Vertex) {
        self.edges.retain(|e| e.target != vertex);
    }

    fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Grow a spanning tree from `root` over [`edges_to_list`].
///
/// An empty graph yields an empty result whatever `root` is. Otherwise a
/// `root` outside `[0, vertex_count)` fails with
/// [`GraphError::InvalidVertexIndex`](crate::GraphError::InvalidVertexIndex).
/// Disconnected graphs are not an error: the result covers the root's
/// component only.
pub fn minimum_spanning_tree(graph: &Graph, root: Vertex) -> Result<MstResult> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(MstResult::empty());
    }
    check_vertex(root, n)?;

    let list = edges_to_list(graph);
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<Vertex>> = vec![None; n];
    let mut tree_edges = Vec::with_capacity(n - 1);
    let mut total_weight: Weight = 0;
    let mut frontier = Frontier::new();

    visited[root] = true;
    let mut reached = 1;
    frontier.expand(&list, root, &visited);

    while reached < n && !frontier.is_empty() {
        let Some(edge) = frontier.extract_min(&visited) else {
            break;
        };

        visited[edge.target] = true;
        parent[edge.target] = Some(edge.source);
        total_weight += edge.weight;
        tree_edges.push((edge.source, edge.target, edge.weight));
        reached += 1;

        tracing::trace!(
            source = edge.source,
            target = edge.target,
            weight = edge.weight,
            "tree edge"
        );

        frontier.retire(edge.target);
        frontier.expand(&list, edge.target, &visited);
    }

    tracing::debug!(root, reached, vertices = n, total_weight, "spanning tree built");

    Ok(MstResult {
        root: Some(root),
        parent,
        total_weight,
        tree_edges,
    })
}
