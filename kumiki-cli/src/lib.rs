//! Support library for the kumiki CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
