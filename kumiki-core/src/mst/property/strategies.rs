//! Graph generation strategies for MST property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`], so a failing proptest
//! case can be replayed from its `(distribution, seed)` pair alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs. The driver scans the registry for
/// every popped arc, so dense inputs stay small.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.2, 0.6), distribution, |r| {
                r.gen_range(0.1_f32..100.0)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<f32> = (0..pool_size)
                .map(|_| f32::from(rng.gen_range(1_u8..=10)))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.7, 0.95), distribution, |r| {
                r.gen_range(0.1_f32..100.0)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds an edge between every unordered vertex pair with a probability drawn
/// from `probability_range`, then guarantees at least one edge.
fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f32,
) -> MstFixture {
    let probability: f64 = rng.gen_range(probability_range.0..=probability_range.1);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((left, right, weight(&mut *rng)));
            }
        }
    }
    if edges.is_empty() && vertex_count >= 2 {
        edges.push((0, 1, weight(&mut *rng)));
    }
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning tree (so the graph is connected) and sprinkles
/// extra edges on top. Extra edges may be self-loops or parallel edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, f32)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0.1_f32..100.0)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push((left, right, rng.gen_range(0.1_f32..100.0)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Generates 2-5 components, each a random path plus extra internal edges.
/// No edge crosses between components.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size: usize = rng.gen_range(1..=10);
        for index in 1..size {
            edges.push((offset + index - 1, offset + index, rng.gen_range(0.1_f32..100.0)));
        }
        let probability: f64 = rng.gen_range(0.1..=0.5);
        for left in 0..size {
            for right in (left + 2)..size {
                if rng.gen_bool(probability) {
                    edges.push((offset + left, offset + right, rng.gen_range(0.1_f32..100.0)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
