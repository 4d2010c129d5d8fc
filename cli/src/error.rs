//! Error types for the graph-engine CLI.

use std::path::PathBuf;

use graph_engine_core::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or writing a graph file failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The graph file was malformed or referenced a bad vertex.
    #[error("{path}: {source}")]
    Graph {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    /// An algorithm rejected its arguments (e.g. root out of range).
    #[error(transparent)]
    Algorithm(#[from] GraphError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
