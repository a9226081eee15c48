//! Repeatability: the driver accepts the same arcs in the same order every
//! time it runs over the same graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{MinimumSpanningTree, execute, initialize};

use super::types::MstFixture;

/// Number of repeated runs compared against the first one.
const REPETITIONS: usize = 3;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let run = || -> Result<MinimumSpanningTree, String> {
        let mut list = initialize(&graph);
        execute(&mut list).map_err(|err| err.to_string())
    };

    let baseline = run();
    for attempt in 1..=REPETITIONS {
        let current = run();
        if current != baseline {
            return Err(TestCaseError::fail(format!(
                "run {attempt} diverged from the first run ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}
