//! Equivalence with the sequential Kruskal oracle.
//!
//! Connected inputs must produce a tree with the oracle's edge count and
//! total weight. Inputs the oracle splits into several components must fail
//! with a disconnection error.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    error::MstError,
    mst::{execute, initialize},
};

use super::helpers::total_weight_f64;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    let mut list = initialize(&graph);
    let outcome = execute(&mut list);

    if oracle.component_count > 1 {
        return match outcome {
            Err(MstError::Disconnected {
                remaining_components,
                ..
            }) if remaining_components >= 1 => Ok(()),
            other => Err(TestCaseError::fail(format!(
                "expected disconnection for {} components, got {other:?} ({})",
                oracle.component_count,
                fixture.describe(),
            ))),
        };
    }

    let tree = outcome.map_err(|err| {
        TestCaseError::fail(format!("execute failed: {err} ({})", fixture.describe()))
    })?;

    let weight = total_weight_f64(tree.arcs());
    if (weight - oracle.total_weight).abs() > 1e-9 {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: driver={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe(),
        )));
    }
    if tree.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: driver={}, oracle={} ({})",
            tree.len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }
    Ok(())
}
