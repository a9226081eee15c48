//! Structural invariants of the returned tree and the drained registry.
//!
//! For every connected input:
//!
//! - the tree has `V - 1` arcs, none of them a self-loop;
//! - the arcs are acyclic and every endpoint is a graph vertex;
//! - the registry ends with one tree covering every vertex;
//! - draining the registry again yields no further arcs.
//!
//! For disconnected inputs the registry must still partition the vertices
//! after the failure.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::Arc,
    mst::{execute, initialize},
};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let mut list = initialize(&graph);
    let components = count_components(fixture.vertex_count, &fixture.edges);

    let outcome = execute(&mut list);
    if components > 1 {
        if outcome.is_ok() {
            return Err(TestCaseError::fail(format!(
                "disconnected input produced a tree ({})",
                fixture.describe()
            )));
        }
        return list.check_partition().map_err(|err| {
            TestCaseError::fail(format!(
                "registry lost its partition after failure: {err} ({})",
                fixture.describe()
            ))
        });
    }

    let tree = outcome.map_err(|err| {
        TestCaseError::fail(format!("execute failed: {err} ({})", fixture.describe()))
    })?;

    validate_arcs(fixture.vertex_count, tree.arcs())?;
    if tree.len() != fixture.vertex_count - 1 {
        return Err(TestCaseError::fail(format!(
            "arc count {}, expected {} ({})",
            tree.len(),
            fixture.vertex_count - 1,
            fixture.describe(),
        )));
    }
    if list.size() != 1 {
        return Err(TestCaseError::fail(format!(
            "registry holds {} trees after a full drain",
            list.size()
        )));
    }
    let covered = list.iter().map(|tree| tree.vertex_count()).sum::<usize>();
    if covered != fixture.vertex_count {
        return Err(TestCaseError::fail(format!(
            "surviving tree covers {covered} of {} vertices",
            fixture.vertex_count
        )));
    }
    list.check_partition()
        .map_err(|err| TestCaseError::fail(format!("partition broken: {err}")))?;

    let again = execute(&mut list)
        .map_err(|err| TestCaseError::fail(format!("second drain failed: {err}")))?;
    if !again.is_empty() {
        return Err(TestCaseError::fail(format!(
            "second drain accepted {} arcs",
            again.len()
        )));
    }
    Ok(())
}

/// Rejects self-loops, out-of-range endpoints and cycles.
fn validate_arcs(vertex_count: usize, arcs: &[Arc]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, arc) in arcs.iter().enumerate() {
        let (lo, hi) = arc.endpoints();
        if lo == hi {
            return Err(TestCaseError::fail(format!("arc {i}: self-loop on {lo}")));
        }
        if hi.index() >= vertex_count {
            return Err(TestCaseError::fail(format!(
                "arc {i}: endpoint {hi} out of range"
            )));
        }
        let ra = find_root(&mut parent, lo.index());
        let rb = find_root(&mut parent, hi.index());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "arc {i}: ({lo}, {hi}) creates a cycle"
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}
