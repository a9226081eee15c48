//! Command implementations and argument parsing for the kumiki CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kumiki_core::{Graph, GraphParseError, MinimumSpanningTree, MstError, SolverBuilder};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kumiki", about = "Compute minimum spanning trees of weighted graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph file and print its minimum spanning tree.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to a graph in the line-based text format.
    pub path: PathBuf,

    /// Name reported in the summary (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Verify the partial tree partition after every merge.
    #[arg(long = "check-invariants")]
    pub check_invariants: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file was malformed.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the rejected file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: GraphParseError,
    },
    /// The solver rejected the graph.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Parse { source, .. } => Some(source.code().as_str()),
            Self::Mst(error) => Some(error.code().as_str()),
        }
    }
}

/// One arc of the reported tree, with endpoints resolved to vertex names.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryArc {
    /// Name of the endpoint with the smaller vertex id.
    pub left: String,
    /// Name of the endpoint with the larger vertex id.
    pub right: String,
    /// Arc weight.
    pub weight: f32,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Name of the solved graph.
    pub graph: String,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Sum of the arc weights.
    pub total_weight: f64,
    /// Tree arcs ordered by weight, then by endpoint names.
    pub arcs: Vec<SummaryArc>,
}

impl ExecutionSummary {
    fn new(name: String, graph: &Graph, tree: &MinimumSpanningTree) -> Self {
        let mut arcs: Vec<SummaryArc> = tree
            .arcs()
            .iter()
            .map(|arc| {
                let (lo, hi) = arc.endpoints();
                SummaryArc {
                    left: graph.name(lo).unwrap_or_default().to_owned(),
                    right: graph.name(hi).unwrap_or_default().to_owned(),
                    weight: arc.weight(),
                }
            })
            .collect();
        arcs.sort_by(|a, b| {
            a.weight
                .total_cmp(&b.weight)
                .then_with(|| a.left.cmp(&b.left))
                .then_with(|| a.right.cmp(&b.right))
        });
        Self {
            graph: name,
            vertices: graph.vertex_count(),
            total_weight: tree.total_weight(),
            arcs,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or solving the graph fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kumiki_cli::cli::{Cli, Command, SolveCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\nA\nB\nC\nA B 1\nB C 2\nA C 4\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         path: file.path().to_path_buf(),
///         name: Some("triangle".into()),
///         check_invariants: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.arcs.len(), 2);
/// assert_eq!(summary.total_weight, 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            solve_command(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = field::Empty, graph = field::Empty, check_invariants = command.check_invariants),
)]
pub(super) fn solve_command(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let SolveCommand {
        path,
        name,
        check_invariants,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let name = derive_graph_name(&path, name.as_deref());
    span.record("graph", field::display(&name));

    let reader = open_graph(&path)?;
    let graph = Graph::from_reader(reader).map_err(|source| CliError::Parse {
        path: path.clone(),
        source,
    })?;
    let tree = SolverBuilder::new()
        .with_invariant_checks(check_invariants)
        .build()
        .solve(&graph)?;

    let summary = ExecutionSummary::new(name, &graph, &tree);
    info!(
        graph = summary.graph.as_str(),
        vertices = summary.vertices,
        arcs = summary.arcs.len(),
        total_weight = summary.total_weight,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_graph", err, fields(path = field::Empty))]
pub(super) fn open_graph(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` as a header followed by one
/// tab-separated line per arc.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kumiki_cli::cli::{ExecutionSummary, SummaryArc, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     graph: "pair".into(),
///     vertices: 2,
///     total_weight: 1.5,
///     arcs: vec![SummaryArc {
///         left: "A".into(),
///         right: "B".into(),
///         weight: 1.5,
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "graph: pair\nvertices: 2\narcs: 1\ntotal weight: 1.5\nA\tB\t1.5\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "arcs: {}", summary.arcs.len())?;
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    for arc in &summary.arcs {
        writeln!(writer, "{}\t{}\t{}", arc.left, arc.right, arc.weight)?;
    }
    Ok(())
}
