//! Plain-text graph format.
//!
//! ```text
//! <vertex_count> <edge_count> <G|D> <0|1>
//! <source> <target> [weight]
//! ...
//! ```
//!
//! `G` marks an undirected graph, `D` a digraph; the last header field says
//! whether edge lines carry a weight. Tokens are whitespace separated and
//! blank lines are ignored.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeRecord, Graph, Orientation, Vertex, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    vertex_count: usize,
    edge_count: usize,
    orientation: Orientation,
    weighted: bool,
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_number<T: std::str::FromStr>(token: Option<&str>, line: usize, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| parse_error(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {what} '{token}'")))
}

fn parse_header(text: &str, line: usize) -> Result<Header> {
    let mut tokens = text.split_whitespace();
    let vertex_count = parse_number(tokens.next(), line, "vertex count")?;
    let edge_count = parse_number(tokens.next(), line, "edge count")?;

    let kind = tokens
        .next()
        .ok_or_else(|| parse_error(line, "missing graph type"))?;
    let mut chars = kind.chars();
    let orientation = match (chars.next(), chars.next()) {
        (Some(c), None) => Orientation::from_code(c),
        _ => None,
    }
    .ok_or_else(|| parse_error(line, format!("graph type must be G or D, got '{kind}'")))?;

    let weighted = match tokens.next() {
        Some("0") => false,
        Some("1") => true,
        Some(other) => {
            return Err(parse_error(
                line,
                format!("weighted flag must be 0 or 1, got '{other}'"),
            ))
        }
        None => return Err(parse_error(line, "missing weighted flag")),
    };

    if let Some(extra) = tokens.next() {
        return Err(parse_error(line, format!("unexpected token '{extra}'")));
    }

    Ok(Header {
        vertex_count,
        edge_count,
        orientation,
        weighted,
    })
}

fn parse_edge(text: &str, line: usize, weighted: bool) -> Result<EdgeRecord> {
    let mut tokens = text.split_whitespace();
    let source: Vertex = parse_number(tokens.next(), line, "source vertex")?;
    let target: Vertex = parse_number(tokens.next(), line, "target vertex")?;
    let weight: Option<Weight> = if weighted {
        Some(parse_number(tokens.next(), line, "weight")?)
    } else {
        None
    };

    if let Some(extra) = tokens.next() {
        return Err(parse_error(line, format!("unexpected token '{extra}'")));
    }

    Ok(EdgeRecord {
        source,
        target,
        weight,
    })
}

/// Parse a graph from its textual form and build it.
///
/// Vertex indices are validated by [`Graph::build`], so an out-of-range
/// endpoint surfaces as `InvalidVertexIndex` rather than a parse error.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header_text) = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing header"))?;
    let header = parse_header(header_text, header_line)?;

    // Sized by the body; the header count is untrusted
    let mut records = Vec::new();
    for (line, text) in lines {
        if records.len() == header.edge_count {
            return Err(GraphError::EdgeCountMismatch {
                expected: header.edge_count,
                found: records.len() + 1,
            });
        }
        records.push(parse_edge(text, line, header.weighted)?);
    }

    if records.len() != header.edge_count {
        return Err(GraphError::EdgeCountMismatch {
            expected: header.edge_count,
            found: records.len(),
        });
    }

    Graph::build(
        header.vertex_count,
        header.orientation,
        header.weighted,
        records,
    )
}

/// Render a graph in the textual form accepted by [`parse_graph`].
pub fn write_graph(graph: &Graph) -> String {
    let mut out = format!(
        "{} {} {} {}\n",
        graph.vertex_count(),
        graph.edge_count(),
        graph.orientation().code(),
        u8::from(graph.is_weighted())
    );
    for edge in graph.edges() {
        let line = if graph.is_weighted() {
            format!("{} {} {}\n", edge.source, edge.target, edge.weight)
        } else {
            format!("{} {}\n", edge.source, edge.target)
        };
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::weighted;

    #[test]
    fn test_parse_weighted_undirected() {
        let g = parse_graph("4 4 G 1\n0 1 1\n1 2 2\n2 3 1\n0 3 4\n").unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(!g.is_directed());
        assert!(g.is_weighted());
        assert_eq!(g.matrix().get(3, 0), 4);
    }

    #[test]
    fn test_parse_unweighted_directed() {
        let g = parse_graph("3 2 D 0\n0 1\n1 2\n").unwrap();
        assert!(g.is_directed());
        assert!(!g.is_weighted());
        assert_eq!(g.matrix().get(1, 2), 1);
        assert_eq!(g.matrix().get(2, 1), 0);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_spacing() {
        let g = parse_graph("\n  2 1   G 0 \n\n 0   1\n\n").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.matrix().get(1, 0), 1);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_graph("   \n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_graph_type() {
        let err = parse_graph("2 0 X 0\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("G or D"));
    }

    #[test]
    fn test_bad_weight_flag() {
        assert!(matches!(
            parse_graph("2 0 G 2\n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_weight_reports_line() {
        let err = parse_graph("3 2 G 1\n0 1 5\n1 2\n").unwrap_err();
        assert_eq!(
            err,
            GraphError::Parse {
                line: 3,
                message: "missing weight".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_vertex() {
        let err = parse_graph("3 1 D 0\n0 x\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_too_few_edges() {
        assert_eq!(
            parse_graph("3 3 G 0\n0 1\n1 2\n").unwrap_err(),
            GraphError::EdgeCountMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_too_many_edges() {
        assert!(matches!(
            parse_graph("3 1 G 0\n0 1\n1 2\n"),
            Err(GraphError::EdgeCountMismatch { expected: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_vertex() {
        assert!(matches!(
            parse_graph("2 1 G 0\n0 2\n"),
            Err(GraphError::InvalidVertexIndex { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_huge_header_counts_are_errors() {
        assert!(matches!(
            parse_graph("3 18446744073709551615 G 0\n0 1\n"),
            Err(GraphError::EdgeCountMismatch { found: 1, .. })
        ));
        assert!(matches!(
            parse_graph("5000000000 0 G 0\n"),
            Err(GraphError::MatrixTooLarge {
                vertex_count: 5_000_000_000
            })
        ));
    }

    #[test]
    fn test_write_unweighted_omits_weights() {
        let g = parse_graph("3 2 D 0\n0 1\n2 0\n").unwrap();
        assert_eq!(write_graph(&g), "3 2 D 0\n0 1\n2 0\n");
    }

    #[test]
    fn test_write_then_parse_preserves_edges() {
        let g = weighted(
            5,
            Orientation::Undirected,
            &[(4, 0, 3), (1, 1, 2), (2, 3, 9), (4, 0, 1)],
        );
        let text = write_graph(&g);
        assert!(text.starts_with("5 4 G 1\n"));

        let back = parse_graph(&text).unwrap();
        assert_eq!(back.vertex_count(), g.vertex_count());
        assert_eq!(back.orientation(), g.orientation());
        assert_eq!(back.is_weighted(), g.is_weighted());
        assert_eq!(back.edges(), g.edges());
        assert_eq!(back.matrix(), g.matrix());
    }
}
