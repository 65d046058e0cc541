use super::{
    errors::GeneratorError,
    result::GeneratorResult,
};
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
    seq::IndexedRandom,
};
use std::{
    fmt::Display,
    ops::RangeInclusive,
    str::FromStr,
};

// доля перестановок для PartiallySorted
const PARTIAL_SWAP_RATIO: usize = 10;
// размер пула значений для WithDuplicates: size / 4
const DUPLICATE_POOL_DIVISOR: usize = 4;

pub const DEFAULT_MIN_VALUE: i32 = 1;
pub const DEFAULT_MAX_VALUE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorPolicy {
    Random,
    Ascending,
    Descending,
    PartiallySorted,
    WithDuplicates,
}

impl GeneratorPolicy {
    pub const ALL: [GeneratorPolicy; 5] = [
        Self::Random,
        Self::Ascending,
        Self::Descending,
        Self::PartiallySorted,
        Self::WithDuplicates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::PartiallySorted => "partially-sorted",
            Self::WithDuplicates => "with-duplicates",
        }
    }
}

impl Display for GeneratorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeneratorPolicy {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|policy| policy.name() == normalized)
            .ok_or_else(|| GeneratorError::UnknownPolicy { name: s.to_string() })
    }
}

// SequenceGenerator

pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn generate(
        &mut self,
        policy: GeneratorPolicy,
        size: usize,
        range: RangeInclusive<i32>,
    ) -> GeneratorResult<Vec<i32>> {
        let (start, end) = (*range.start(), *range.end());
        if start > end {
            return Err(GeneratorError::InvertedRange { start, end });
        }
        let values = match policy {
            GeneratorPolicy::Random => self.random(size, start, end),
            GeneratorPolicy::Ascending => {
                let mut values = self.random(size, start, end);
                values.sort_unstable();
                values
            }
            GeneratorPolicy::Descending => {
                let mut values = self.random(size, start, end);
                values.sort_unstable_by(|a, b| b.cmp(a));
                values
            }
            GeneratorPolicy::PartiallySorted => {
                let mut values = self.random(size, start, end);
                values.sort_unstable();
                if size >= 2 {
                    let swaps = (size / PARTIAL_SWAP_RATIO).max(1);
                    for _ in 0..swaps {
                        let i = self.rng.random_range(0..size);
                        let j = self.rng.random_range(0..size);
                        values.swap(i, j);
                    }
                }
                values
            }
            GeneratorPolicy::WithDuplicates => {
                let pool_size = size.div_ceil(DUPLICATE_POOL_DIVISOR).max(1);
                let pool = self.random(pool_size, start, end);
                (0..size)
                    .filter_map(|_| pool.choose(&mut self.rng).copied())
                    .collect()
            }
        };
        Ok(values)
    }

    fn random(&mut self, size: usize, start: i32, end: i32) -> Vec<i32> {
        (0..size).map(|_| self.rng.random_range(start..=end)).collect()
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}
