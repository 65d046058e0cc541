use super::{
    config::EngineConfig,
    factory::AlgorithmFactory,
    kind::AlgorithmKind,
    model::ExecutionResult,
    result::EngineResult,
};
use rayon::prelude::*;
use tracing::debug;

// SortExecutionService - единственная точка входа для вызывающего кода.
// Состояние запуска живет только внутри execute, сервис можно разделять между потоками.

#[derive(Debug, Clone, Copy, Default)]
pub struct SortExecutionService {
    config: EngineConfig,
}

impl SortExecutionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn execute(&self, kind: AlgorithmKind, input: &[i32]) -> ExecutionResult {
        let result = AlgorithmFactory::create(kind).sort(input, self.config);
        debug!(
            algorithm = kind.id(),
            size = input.len(),
            comparisons = result.metrics.comparison_count,
            swaps = result.metrics.swap_count,
            steps = result.steps.len(),
            nanos = result.metrics.execution_time_nanos,
            "sort executed"
        );
        result
    }

    pub fn execute_named(&self, name: &str, input: &[i32]) -> EngineResult<ExecutionResult> {
        let kind = AlgorithmKind::from_name(name)?;
        Ok(self.execute(kind, input))
    }

    // Параллельный запуск нескольких алгоритмов на одном входе.
    // Порядок результатов совпадает с порядком kinds.
    pub fn compare(&self, kinds: &[AlgorithmKind], input: &[i32]) -> Vec<ExecutionResult> {
        kinds
            .par_iter()
            .map(|&kind| self.execute(kind, input))
            .collect()
    }
}

pub fn execute(kind: AlgorithmKind, input: &[i32]) -> ExecutionResult {
    SortExecutionService::new().execute(kind, input)
}
