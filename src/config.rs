pub const DEFAULT_BOGO_MAX_ATTEMPTS: usize = 1_000;
pub const DEFAULT_BOGO_SIZE_LIMIT: usize = 6;

// BogoConfig - границы вероятностного цикла

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BogoConfig {
    pub max_attempts: usize,
    pub size_limit: usize,
    pub seed: Option<u64>,
}

impl Default for BogoConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_BOGO_MAX_ATTEMPTS,
            size_limit: DEFAULT_BOGO_SIZE_LIMIT,
            seed: None,
        }
    }
}

impl BogoConfig {
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// EngineConfig

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    // None - без ограничения промежуточных снимков
    pub max_snapshots: Option<usize>,
    pub bogo: BogoConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_snapshots(mut self, max_snapshots: usize) -> Self {
        self.max_snapshots = Some(max_snapshots);
        self
    }

    pub fn with_bogo(mut self, bogo: BogoConfig) -> Self {
        self.bogo = bogo;
        self
    }
}
