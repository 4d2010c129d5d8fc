//! Subcommand bodies. Each returns the text to print on stdout so the
//! reporting half can be tested without touching the filesystem.

use clap::ValueEnum;
use graph_engine_core::{
    compute_degrees, degree_ranking, edges_to_list, list_to_matrix, matrix_to_list,
    minimum_spanning_tree, shortest_paths, AdjacencyList, Graph, Vertex,
};
use serde_json::json;

use crate::error::CliResult;
use crate::load;
use crate::render;
use crate::settings::{OutputFormat, Settings};

/// Which representation an adjacency list is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListSource {
    /// Scan the adjacency matrix (sorted by neighbor)
    Matrix,
    /// Walk the edge sequence (insertion order)
    Edges,
}

fn build_list(graph: &Graph, from: ListSource) -> AdjacencyList {
    match from {
        ListSource::Matrix => matrix_to_list(graph),
        ListSource::Edges => edges_to_list(graph),
    }
}

fn to_json(value: serde_json::Value) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(&value)? + "\n")
}

/// Full pipeline: read, write the normalised copy, convert both ways, then
/// degrees, spanning tree and shortest paths from `root`.
pub fn run(settings: &Settings, root: Vertex) -> CliResult<String> {
    tracing::info!("[1/7] Reading {}", settings.input.display());
    let graph = load::read_graph(&settings.input)?;

    tracing::info!("[2/7] Writing {}", settings.output.display());
    load::write_graph(&settings.output, &graph)?;

    pipeline_report(&graph, settings.format, root)
}

pub fn pipeline_report(graph: &Graph, format: OutputFormat, root: Vertex) -> CliResult<String> {
    tracing::info!("[3/7] Converting matrix to list");
    let list = matrix_to_list(graph);

    tracing::info!("[4/7] Converting list to matrix");
    let rebuilt = list_to_matrix(&list, graph.vertex_count())?;
    if &rebuilt != graph.matrix() {
        tracing::warn!("matrix rebuilt from the adjacency list differs from the loaded graph");
    }

    tracing::info!("[5/7] Calculating vertex degrees");
    let report = compute_degrees(graph);
    let rows = report.per_vertex();

    tracing::info!("[6/7] Generating minimum spanning tree from {root}");
    let mst = minimum_spanning_tree(graph, root)?;

    tracing::info!("[7/7] Computing shortest paths from {root}");
    let sp = shortest_paths(graph, root)?;

    match format {
        OutputFormat::Json => to_json(json!({
            "graph": render::graph_json(graph),
            "matrix": render::matrix_json(graph.matrix()),
            "list": render::list_json(&list),
            "rebuilt_matrix": render::matrix_json(&rebuilt),
            "degrees": render::degrees_json(&report, &rows),
            "mst": render::mst_json(&mst),
            "shortest_paths": render::paths_json(&sp),
        })),
        OutputFormat::Text => {
            let sections = [
                ("Graph", render::graph_summary(graph)),
                ("Adjacency matrix", render::matrix(graph.matrix())),
                ("Adjacency list", render::list(&list)),
                ("Matrix rebuilt from list", render::matrix(&rebuilt)),
                ("Vertex degrees", render::degrees(&rows)),
                ("Minimum spanning tree", render::mst(&mst)),
                ("Shortest paths", render::paths(&sp)),
            ];
            Ok(sections
                .iter()
                .map(|(title, body)| format!("{title}:\n{body}"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

pub fn convert(settings: &Settings, from: ListSource) -> CliResult<String> {
    let graph = load::read_graph(&settings.input)?;
    convert_report(&graph, settings.format, from)
}

pub fn convert_report(graph: &Graph, format: OutputFormat, from: ListSource) -> CliResult<String> {
    let list = build_list(graph, from);
    match format {
        OutputFormat::Json => to_json(render::list_json(&list)),
        OutputFormat::Text => Ok(render::list(&list)),
    }
}

pub fn degrees(settings: &Settings, top: usize) -> CliResult<String> {
    let graph = load::read_graph(&settings.input)?;
    degrees_report(&graph, settings.format, top)
}

pub fn degrees_report(graph: &Graph, format: OutputFormat, top: usize) -> CliResult<String> {
    let report = compute_degrees(graph);
    let ranked = degree_ranking(&report, top);
    match format {
        OutputFormat::Json => to_json(render::degrees_json(&report, &ranked)),
        OutputFormat::Text => Ok(render::degrees(&ranked)),
    }
}

pub fn mst(settings: &Settings, root: Vertex) -> CliResult<String> {
    let graph = load::read_graph(&settings.input)?;
    mst_report(&graph, settings.format, root)
}

pub fn mst_report(graph: &Graph, format: OutputFormat, root: Vertex) -> CliResult<String> {
    let result = minimum_spanning_tree(graph, root)?;
    match format {
        OutputFormat::Json => to_json(render::mst_json(&result)),
        OutputFormat::Text => Ok(render::mst(&result)),
    }
}

pub fn paths(settings: &Settings, root: Vertex, target: Option<Vertex>) -> CliResult<String> {
    let graph = load::read_graph(&settings.input)?;
    paths_report(&graph, settings.format, root, target)
}

pub fn paths_report(
    graph: &Graph,
    format: OutputFormat,
    root: Vertex,
    target: Option<Vertex>,
) -> CliResult<String> {
    let result = shortest_paths(graph, root)?;
    let route = target.map(|t| result.path_to(t));

    match format {
        OutputFormat::Json => {
            let mut value = render::paths_json(&result);
            if let Some(route) = route {
                value["path"] = json!(route);
            }
            to_json(value)
        }
        OutputFormat::Text => {
            let mut out = render::paths(&result);
            if let Some(route) = route {
                out.push_str(&render::path(route.as_deref()));
            }
            Ok(out)
        }
    }
}
