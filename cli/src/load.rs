use std::fs;
use std::path::Path;
use std::time::Instant;

use graph_engine_core::{format, Graph};

use crate::error::{CliError, CliResult};

/// Read and build the graph stored at `path`.
pub fn read_graph(path: &Path) -> CliResult<Graph> {
    let start = Instant::now();

    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = format::parse_graph(&text).map_err(|source| CliError::Graph {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(graph)
}

/// Write `graph` to `path` in the textual format, replacing any existing file.
pub fn write_graph(path: &Path, graph: &Graph) -> CliResult<()> {
    fs::write(path, format::write_graph(graph)).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "graph written");
    Ok(())
}
