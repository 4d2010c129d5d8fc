use crate::graph::{Graph, Vertex};

/// Per-vertex degree statistics.
///
/// Undirected graphs only carry the total degree. Directed graphs carry in-
/// and out-degree; their total is the sum of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeReport {
    Undirected {
        total: Vec<u32>,
    },
    Directed {
        in_degree: Vec<u32>,
        out_degree: Vec<u32>,
        total: Vec<u32>,
    },
}

impl DegreeReport {
    pub fn total(&self) -> &[u32] {
        match self {
            DegreeReport::Undirected { total } | DegreeReport::Directed { total, .. } => total.as_slice(),
        }
    }

    pub fn in_degree(&self) -> Option<&[u32]> {
        match self {
            DegreeReport::Undirected { .. } => None,
            DegreeReport::Directed { in_degree, .. } => Some(in_degree.as_slice()),
        }
    }

    pub fn out_degree(&self) -> Option<&[u32]> {
        match self {
            DegreeReport::Undirected { .. } => None,
            DegreeReport::Directed { out_degree, .. } => Some(out_degree.as_slice()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.total().len()
    }

    /// One row per vertex, in vertex order.
    pub fn per_vertex(&self) -> Vec<VertexDegree> {
        (0..self.vertex_count())
            .map(|v| VertexDegree {
                vertex: v,
                in_degree: self.in_degree().map(|d| d[v]),
                out_degree: self.out_degree().map(|d| d[v]),
                total_degree: self.total()[v],
            })
            .collect()
    }
}

/// Degree information for a single vertex, as returned by
/// [`DegreeReport::per_vertex`] and [`degree_ranking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDegree {
    pub vertex: Vertex,
    pub in_degree: Option<u32>,
    pub out_degree: Option<u32>,
    pub total_degree: u32,
}

/// Count degrees in one pass over the edge sequence.
///
/// Both endpoints of every edge are credited, so a self-loop adds 2 to its
/// vertex's total even though the matrix stores it once.
pub fn compute_degrees(graph: &Graph) -> DegreeReport {
    let n = graph.vertex_count();
    let mut total = vec![0u32; n];
    let mut in_degree = vec![0u32; n];
    let mut out_degree = vec![0u32; n];

    for edge in graph.edges() {
        out_degree[edge.source] += 1;
        in_degree[edge.target] += 1;
        total[edge.source] += 1;
        total[edge.target] += 1;
    }

    if graph.is_directed() {
        DegreeReport::Directed {
            in_degree,
            out_degree,
            total,
        }
    } else {
        DegreeReport::Undirected { total }
    }
}

/// Return vertices ranked by degree.
///
/// If `top_n` is 0, returns all vertices. Otherwise returns the top N by
/// total degree (descending). Ties are broken by vertex id (ascending).
pub fn degree_ranking(report: &DegreeReport, top_n: usize) -> Vec<VertexDegree> {
    let mut results = report.per_vertex();

    results.sort_by(|a, b| {
        b.total_degree
            .cmp(&a.total_degree)
            .then(a.vertex.cmp(&b.vertex))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
