//! Command-line interface for solving graph files.
//!
//! The `solve` command loads a graph in the line-based text format, computes
//! its minimum spanning tree and reports the selected arcs.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, SolveCommand, SummaryArc, render_summary, run_cli,
};
