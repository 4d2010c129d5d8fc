//! Text tables and JSON documents for the command results.

use graph_engine_core::{
    AdjacencyList, AdjacencyMatrix, DegreeReport, Distance, Graph, MstResult,
    ShortestPathResult, VertexDegree,
};
use serde_json::{json, Value};

const COL: usize = 10;

/// Join rows into a block, one trailing newline per row, trailing padding trimmed.
fn block<I: IntoIterator<Item = String>>(rows: I) -> String {
    rows.into_iter()
        .map(|row| row.trim_end().to_string() + "\n")
        .collect()
}

pub fn graph_summary(graph: &Graph) -> String {
    // The summary keeps its column padding
    let header = format!(
        "{:<COL$} {:<COL$} {:<COL$} {:<COL$}\n",
        "Vertices", "Edges", "Type", "Weighted"
    );
    let values = format!(
        "{:<COL$} {:<COL$} {:<COL$} {:<COL$}\n",
        graph.vertex_count(),
        graph.edge_count(),
        graph.orientation().code(),
        u8::from(graph.is_weighted())
    );
    header + &values
}

pub fn matrix(m: &AdjacencyMatrix) -> String {
    block(m.rows().map(|row| {
        row.iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }))
}

/// One line per vertex: `v: (neighbor|weight)  (neighbor|weight) ...`
pub fn list(adjacency: &AdjacencyList) -> String {
    block(adjacency.iter().map(|(vertex, entries)| {
        let cells: Vec<String> = entries
            .iter()
            .map(|e| format!("({}|{})", e.neighbor, e.weight))
            .collect();
        format!("{}: {}", vertex, cells.join("  "))
    }))
}

pub fn degrees(rows: &[VertexDegree]) -> String {
    let directed = rows.first().is_some_and(|d| d.in_degree.is_some());
    if directed {
        let header = format!(
            "{:<COL$} {:<COL$} {:<COL$} {:<COL$}",
            "Vertex", "In", "Out", "Total"
        );
        block(std::iter::once(header).chain(rows.iter().map(|d| {
            format!(
                "{:<COL$} {:<COL$} {:<COL$} {:<COL$}",
                d.vertex,
                d.in_degree.unwrap_or(0),
                d.out_degree.unwrap_or(0),
                d.total_degree
            )
        })))
    } else {
        let header = format!("{:<COL$} {:<COL$}", "Vertex", "Degree");
        block(
            std::iter::once(header)
                .chain(rows.iter().map(|d| format!("{:<COL$} {:<COL$}", d.vertex, d.total_degree))),
        )
    }
}

fn vertex_or_dash(v: Option<usize>) -> String {
    v.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn mst(result: &MstResult) -> String {
    let header = format!("{:<COL$} {:<COL$}", "Vertex", "Parent");
    let rows = result
        .parent
        .iter()
        .enumerate()
        .map(|(v, p)| format!("{:<COL$} {}", v, vertex_or_dash(*p)));
    let total = format!(
        "Total weight: {} ({} of {} vertices reached)",
        result.total_weight,
        result.reached(),
        result.parent.len()
    );
    block(std::iter::once(header).chain(rows).chain(std::iter::once(total)))
}

pub fn paths(result: &ShortestPathResult) -> String {
    let header = format!("{:<COL$} {:<COL$} {:<COL$}", "Vertex", "Distance", "Parent");
    let rows = result
        .distance
        .iter()
        .zip(&result.parent)
        .enumerate()
        .map(|(v, (d, p))| format!("{:<COL$} {:<COL$} {}", v, d.to_string(), vertex_or_dash(*p)));
    block(std::iter::once(header).chain(rows))
}

pub fn path(route: Option<&[usize]>) -> String {
    match route {
        Some(vertices) => {
            let hops: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
            format!("Path: {}\n", hops.join(" -> "))
        }
        None => "Path: unreachable\n".to_string(),
    }
}

pub fn graph_json(graph: &Graph) -> Value {
    json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "directed": graph.is_directed(),
        "weighted": graph.is_weighted(),
    })
}

pub fn matrix_json(matrix: &AdjacencyMatrix) -> Value {
    Value::Array(matrix.rows().map(|row| json!(row)).collect())
}

pub fn list_json(list: &AdjacencyList) -> Value {
    Value::Array(
        list.iter()
            .map(|(_, entries)| {
                Value::Array(
                    entries
                        .iter()
                        .map(|e| json!({ "neighbor": e.neighbor, "weight": e.weight }))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// `rows` is listed under `vertices` in the order given.
pub fn degrees_json(report: &DegreeReport, rows: &[VertexDegree]) -> Value {
    let vertices: Vec<Value> = rows
        .iter()
        .map(|d| {
            json!({
                "vertex": d.vertex,
                "in_degree": d.in_degree,
                "out_degree": d.out_degree,
                "total_degree": d.total_degree,
            })
        })
        .collect();
    json!({
        "total": report.total(),
        "in_degree": report.in_degree(),
        "out_degree": report.out_degree(),
        "vertices": vertices,
    })
}

pub fn mst_json(result: &MstResult) -> Value {
    let edges: Vec<Value> = result
        .edges()
        .iter()
        .map(|&(parent, child, weight)| json!({ "parent": parent, "child": child, "weight": weight }))
        .collect();
    json!({
        "root": result.root,
        "parent": result.parent,
        "total_weight": result.total_weight,
        "reached": result.reached(),
        "edges": edges,
    })
}

fn distance_json(d: &Distance) -> Value {
    match d.value() {
        Some(v) => json!(v),
        None => Value::Null,
    }
}

pub fn paths_json(result: &ShortestPathResult) -> Value {
    let distance: Vec<Value> = result.distance.iter().map(distance_json).collect();
    json!({
        "root": result.root,
        "distance": distance,
        "parent": result.parent,
    })
}
