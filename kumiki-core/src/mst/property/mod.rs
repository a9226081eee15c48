//! Property-based tests for the partial-tree MST driver.
//!
//! Checks the driver against a sequential Kruskal oracle, validates the
//! structure of the returned tree and the registry left behind, and confirms
//! that repeated runs over the same graph accept the same arcs in the same
//! order.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
