//! graph-engine CLI - load a graph file and run the engine over it.
//!
//! # Commands
//!
//! - `graph-engine run` - Full pipeline: read, write, convert, degrees, tree, paths
//! - `graph-engine convert` - Print the adjacency list
//! - `graph-engine degrees` - Vertex degree table
//! - `graph-engine mst` - Spanning tree from a root
//! - `graph-engine paths` - Shortest distances from a root
//!
//! # Examples
//!
//! ```bash
//! # Run the whole pipeline over input.txt, writing output.txt
//! graph-engine run
//!
//! # Adjacency list in edge insertion order, as JSON
//! graph-engine convert --from edges --input graph.txt --format json
//!
//! # Shortest path from vertex 2 to vertex 7
//! graph-engine paths --root 2 --target 7
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use graph_engine_core::Vertex;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod load;
mod render;
mod settings;

use commands::ListSource;
use settings::{GlobalArgs, Settings};

/// graph-engine - adjacency conversions, degrees, spanning trees and shortest paths
#[derive(Parser)]
#[command(name = "graph-engine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every step over the input graph (default)
    Run {
        /// Root vertex for the spanning tree and shortest paths
        #[arg(short, long, default_value_t = 0)]
        root: Vertex,
    },

    /// Print the adjacency list
    Convert {
        /// Representation to derive the list from
        #[arg(long, value_enum, default_value_t = ListSource::Matrix)]
        from: ListSource,
    },

    /// Print vertex degrees, highest first
    Degrees {
        /// Only show the N highest-degree vertices (0 = all)
        #[arg(short, long, default_value_t = 0)]
        top: usize,
    },

    /// Grow a spanning tree from a root vertex
    Mst {
        /// Root vertex
        #[arg(short, long, default_value_t = 0)]
        root: Vertex,
    },

    /// Shortest distances from a root vertex
    Paths {
        /// Root vertex
        #[arg(short, long, default_value_t = 0)]
        root: Vertex,

        /// Also print the path to this vertex
        #[arg(long)]
        target: Option<Vertex>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::new(settings::log_directive(verbose, quiet));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.global.verbose, cli.global.quiet);
    let settings = Settings::from(&cli.global);

    let result = match cli.command.unwrap_or(Commands::Run { root: 0 }) {
        Commands::Run { root } => commands::run(&settings, root),
        Commands::Convert { from } => commands::convert(&settings, from),
        Commands::Degrees { top } => commands::degrees(&settings, top),
        Commands::Mst { root } => commands::mst(&settings, root),
        Commands::Paths { root, target } => commands::paths(&settings, root, target),
    };

    match result {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
