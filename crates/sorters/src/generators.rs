use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const FEW_UNIQUE_KEYS: u64 = 16;
const CONSTANT_KEY: u64 = 7;

/// Input shapes the benchmark driver feeds to the sorters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataCase {
    RandomUniform,
    NearlySortedSwaps,
    ReverseSorted,
    FewUnique,
    ConstantKey,
}

pub const ALL_CASES: [DataCase; 5] = [
    DataCase::RandomUniform,
    DataCase::NearlySortedSwaps,
    DataCase::ReverseSorted,
    DataCase::FewUnique,
    DataCase::ConstantKey,
];

impl DataCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySortedSwaps => "nearly_sorted_1pct_swaps",
            Self::ReverseSorted => "reverse_sorted",
            Self::FewUnique => "few_unique_16",
            Self::ConstantKey => "constant_key",
        }
    }
}

/// Produces a fresh dataset for one timed run; deterministic in `seed`.
pub fn generate_case(case: DataCase, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);

    match case {
        DataCase::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        DataCase::NearlySortedSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size >= 2 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        DataCase::ReverseSorted => (0..size as u64).rev().collect(),
        DataCase::FewUnique => (0..size)
            .map(|_| (rng.random::<u64>() % FEW_UNIQUE_KEYS) * 17)
            .collect(),
        DataCase::ConstantKey => vec![CONSTANT_KEY; size],
    }
}
