use crate::error::{check_vertex, GraphError, Result};

/// Positional vertex identifier in `[0, vertex_count)`.
pub type Vertex = usize;

/// Edge weight. Unweighted graphs store 1 for every edge.
pub type Weight = i64;

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Plain graph: every edge is mirrored in the matrix.
    Undirected,
    /// Digraph: edges only go from source to target.
    Directed,
}

impl Orientation {
    /// Single-letter code used by the textual format: `G` for graphs, `D` for digraphs.
    pub fn code(self) -> char {
        match self {
            Orientation::Undirected => 'G',
            Orientation::Directed => 'D',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'G' => Some(Orientation::Undirected),
            'D' => Some(Orientation::Directed),
            _ => None,
        }
    }
}

/// A stored edge, kept in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: Weight,
}

/// Caller-supplied edge for [`Graph::build`]. `weight` is optional; it is
/// ignored for unweighted graphs and defaults to 1 when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: Option<Weight>,
}

impl EdgeRecord {
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self {
            source,
            target,
            weight: None,
        }
    }

    pub fn weighted(source: Vertex, target: Vertex, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight: Some(weight),
        }
    }
}

impl From<(Vertex, Vertex)> for EdgeRecord {
    fn from((source, target): (Vertex, Vertex)) -> Self {
        EdgeRecord::new(source, target)
    }
}

impl From<(Vertex, Vertex, Weight)> for EdgeRecord {
    fn from((source, target, weight): (Vertex, Vertex, Weight)) -> Self {
        EdgeRecord::weighted(source, target, weight)
    }
}

/// Dense `n × n` grid, row-major. A zero cell means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Zero-filled matrix. Fails with [`GraphError::MatrixTooLarge`] when
    /// `size * size` cells overflow or cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        let too_large = || GraphError::MatrixTooLarge { vertex_count: size };
        let len = size.checked_mul(size).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, 0);

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell `[row][col]`. Panics if either index is out of range.
    pub fn get(&self, row: Vertex, col: Vertex) -> Weight {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: Vertex, col: Vertex, value: Weight) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    fn increment(&mut self, row: Vertex, col: Vertex) {
        let idx = self.index(row, col);
        self.cells[idx] += 1;
    }

    pub fn row(&self, row: Vertex) -> &[Weight] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // chunks(0) panics, so an empty matrix yields no rows
        self.cells.chunks(self.size.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    fn index(&self, row: Vertex, col: Vertex) -> usize {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of range for size {}",
            self.size
        );
        row * self.size + col
    }
}

/// Immutable in-memory graph: edge list in insertion order plus the derived
/// adjacency matrix.
///
/// For unweighted graphs the matrix counts edge multiplicity; an undirected
/// self-loop bumps its diagonal cell once. For weighted graphs the last-seen
/// parallel edge wins.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    orientation: Orientation,
    weighted: bool,
    edges: Vec<Edge>,
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Validate and build a graph. Fails with
    /// [`GraphError::InvalidVertexIndex`](crate::GraphError::InvalidVertexIndex)
    /// on the first edge with an endpoint outside `[0, vertex_count)`.
    pub fn build<I, E>(
        vertex_count: usize,
        orientation: Orientation,
        weighted: bool,
        edges: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        let mut stored = Vec::new();
        let mut matrix = AdjacencyMatrix::new(vertex_count)?;

        for record in edges {
            let record: EdgeRecord = record.into();
            check_vertex(record.source, vertex_count)?;
            check_vertex(record.target, vertex_count)?;

            let (s, t) = (record.source, record.target);
            let weight = if weighted { record.weight.unwrap_or(1) } else { 1 };

            if weighted {
                matrix.set(s, t, weight);
                if orientation == Orientation::Undirected {
                    matrix.set(t, s, weight);
                }
            } else {
                matrix.increment(s, t);
                if orientation == Orientation::Undirected && s != t {
                    matrix.increment(t, s);
                }
            }

            stored.push(Edge {
                source: s,
                target: t,
                weight,
            });
        }

        tracing::debug!(
            vertices = vertex_count,
            edges = stored.len(),
            directed = orientation == Orientation::Directed,
            weighted,
            "graph built"
        );

        Ok(Self {
            vertex_count,
            orientation,
            weighted,
            edges: stored,
            matrix,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Edges in the order they were supplied to [`Graph::build`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let matrix_mem = self.vertex_count * self.vertex_count * size_of::<Weight>();
        let edge_mem = self.edges.len() * size_of::<Edge>();

        size_of::<Self>() + matrix_mem + edge_mem
    }
}
