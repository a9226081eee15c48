//! Line-based text loader for [`Graph`].
//!
//! The format is a vertex count, one vertex name per line, then one
//! `<name> <name> <weight>` line per undirected edge. Blank lines and lines
//! starting with `#` are skipped in every section, so `#` cannot start a
//! vertex name; names containing it elsewhere are rejected as malformed.
//! Reported line numbers are 1-based and refer to the raw input.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::error::{GraphError, define_error_codes};

use super::{Graph, VertexId};

/// Errors raised while reading a graph description.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read graph input: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// The input ended before the vertex count line.
    #[error("graph input is missing the vertex count line")]
    MissingVertexCount,
    /// The vertex count line was not a non-negative integer.
    #[error("line {line}: invalid vertex count `{raw}`")]
    InvalidVertexCount {
        /// Line holding the rejected value.
        line: usize,
        /// Raw text of the line.
        raw: String,
    },
    /// Fewer vertex names than announced were present.
    #[error("expected {expected} vertex names but found {found}")]
    MissingVertexNames {
        /// Announced vertex count.
        expected: usize,
        /// Names read before the input ended.
        found: usize,
    },
    /// A vertex line did not hold exactly one token, or the token contained
    /// the reserved `#` character.
    #[error("line {line}: vertex name must be a single token without `#`, got `{raw}`")]
    MalformedVertexName {
        /// Offending line.
        line: usize,
        /// Raw text of the line.
        raw: String,
    },
    /// An edge line did not hold exactly three tokens.
    #[error("line {line}: expected `<name> <name> <weight>`, got `{raw}`")]
    MalformedEdge {
        /// Offending line.
        line: usize,
        /// Raw text of the line.
        raw: String,
    },
    /// An edge referenced a name that was never declared.
    #[error("line {line}: unknown vertex `{name}`")]
    UnknownVertex {
        /// Offending line.
        line: usize,
        /// Undeclared vertex name.
        name: String,
    },
    /// An edge weight was not a finite number.
    #[error("line {line}: invalid weight `{raw}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Raw weight token.
        raw: String,
    },
    /// The graph rejected a declared vertex or edge.
    #[error("line {line}: {source}")]
    Graph {
        /// Offending line.
        line: usize,
        /// Underlying graph error.
        #[source]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphParseError`] variants.
    enum GraphParseErrorCode for GraphParseError {
        /// Reading from the underlying source failed.
        Io => Io { .. } => "GRAPH_PARSE_IO",
        /// The input ended before the vertex count line.
        MissingVertexCount => MissingVertexCount => "GRAPH_PARSE_MISSING_VERTEX_COUNT",
        /// The vertex count line was not a non-negative integer.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_PARSE_INVALID_VERTEX_COUNT",
        /// Fewer vertex names than announced were present.
        MissingVertexNames => MissingVertexNames { .. } => "GRAPH_PARSE_MISSING_VERTEX_NAMES",
        /// A vertex line did not hold exactly one token.
        MalformedVertexName => MalformedVertexName { .. } => "GRAPH_PARSE_MALFORMED_VERTEX_NAME",
        /// An edge line did not hold exactly three tokens.
        MalformedEdge => MalformedEdge { .. } => "GRAPH_PARSE_MALFORMED_EDGE",
        /// An edge referenced a name that was never declared.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_PARSE_UNKNOWN_VERTEX",
        /// An edge weight was not a finite number.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_PARSE_INVALID_WEIGHT",
        /// The graph rejected a declared vertex or edge.
        Graph => Graph { .. } => "GRAPH_PARSE_GRAPH",
    }
}

impl Graph {
    /// Reads a graph in the line-based text format.
    ///
    /// # Errors
    /// Returns [`GraphParseError`] for I/O failures and malformed input.
    ///
    /// # Examples
    /// ```
    /// use kumiki_core::Graph;
    ///
    /// let input = "3\nA\nB\nC\nA B 1\nB C 2.5\n";
    /// let graph = Graph::from_reader(input.as_bytes())?;
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), kumiki_core::GraphParseError>(())
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Self, GraphParseError> {
        parse_graph(reader)
    }
}

/// Reads a graph in the line-based text format.
///
/// # Errors
/// Returns [`GraphParseError`] for I/O failures and malformed input.
#[instrument(name = "core.parse_graph", err, skip(reader))]
pub fn parse_graph(reader: impl BufRead) -> Result<Graph, GraphParseError> {
    let mut lines = ContentLines::new(reader);

    let (line, raw) = lines
        .next_line()?
        .ok_or(GraphParseError::MissingVertexCount)?;
    let vertex_count = raw
        .parse::<usize>()
        .map_err(|_| GraphParseError::InvalidVertexCount {
            line,
            raw: raw.clone(),
        })?;

    let mut graph = Graph::new();
    for found in 0..vertex_count {
        let Some((line, raw)) = lines.next_line()? else {
            return Err(GraphParseError::MissingVertexNames {
                expected: vertex_count,
                found,
            });
        };
        if raw.split_whitespace().count() != 1 || raw.contains('#') {
            return Err(GraphParseError::MalformedVertexName { line, raw });
        }
        graph
            .add_vertex(raw)
            .map_err(|source| GraphParseError::Graph { line, source })?;
    }

    while let Some((line, raw)) = lines.next_line()? {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [left, right, weight] = tokens.as_slice() else {
            return Err(GraphParseError::MalformedEdge {
                line,
                raw: raw.clone(),
            });
        };
        let left = resolve(&graph, line, left)?;
        let right = resolve(&graph, line, right)?;
        let weight = weight
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| GraphParseError::InvalidWeight {
                line,
                raw: (*weight).to_owned(),
            })?;
        graph
            .add_edge(left, right, weight)
            .map_err(|source| GraphParseError::Graph { line, source })?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph parsed"
    );
    Ok(graph)
}

fn resolve(graph: &Graph, line: usize, name: &str) -> Result<VertexId, GraphParseError> {
    graph
        .vertex_by_name(name)
        .ok_or_else(|| GraphParseError::UnknownVertex {
            line,
            name: name.to_owned(),
        })
}

/// Yields trimmed, non-empty, non-comment lines with their 1-based numbers.
struct ContentLines<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    fn next_line(&mut self) -> io::Result<Option<(usize, String)>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let trimmed = self.buffer.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some((self.line, trimmed.to_owned())));
        }
    }
}
