use super::kind::AlgorithmKind;
use serde::Serialize;
use smallvec::SmallVec;

pub const START_DESCRIPTION: &str = "Start";
pub const FINISHED_DESCRIPTION: &str = "Finished";

pub type Highlights = SmallVec<[usize; 4]>;

// Snapshot - состояние массива на одном шаге

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub array_state: Vec<i32>,
    pub highlighted: Highlights,
    pub description: String,
}

impl Snapshot {
    pub fn new(array_state: Vec<i32>, highlighted: Highlights, description: String) -> Self {
        Self { array_state, highlighted, description }
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }
}

// Metrics

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub algorithm: AlgorithmKind,
    pub comparison_count: u64,
    pub swap_count: u64,
    pub execution_time_nanos: u64,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl Metrics {
    // Сумма инструментированных операций
    pub fn total_operations(&self) -> u64 {
        self.comparison_count + self.swap_count
    }

    pub fn execution_time_millis(&self) -> f64 {
        self.execution_time_nanos as f64 / 1_000_000.0
    }
}

// ExecutionResult

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub final_array: Vec<i32>,
    pub steps: Vec<Snapshot>,
    pub metrics: Metrics,
}

impl ExecutionResult {
    #[inline]
    pub fn algorithm(&self) -> AlgorithmKind {
        self.metrics.algorithm
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_sorted(&self) -> bool {
        self.final_array.windows(2).all(|w| w[0] <= w[1])
    }

    // Первый шаг всегда "Start"
    pub fn initial(&self) -> Option<&Snapshot> {
        self.steps.first()
    }

    // Последний шаг всегда "Finished"
    pub fn finished(&self) -> Option<&Snapshot> {
        self.steps.last()
    }
}
