use super::{
    algorithms::{self, SortProcedure},
    config::EngineConfig,
    context::SortContext,
    kind::AlgorithmKind,
    model::{
        ExecutionResult,
        Metrics,
        FINISHED_DESCRIPTION,
        START_DESCRIPTION,
    },
    result::EngineResult,
};
use std::time::Instant;

// SortAlgorithm - вид алгоритма и его процедура

#[derive(Debug, Clone, Copy)]
pub struct SortAlgorithm {
    kind: AlgorithmKind,
    procedure: SortProcedure,
}

impl SortAlgorithm {
    #[inline]
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    // Полный запуск с инструментированием: Start, таймер, процедура, Finished
    pub fn sort(&self, input: &[i32], config: EngineConfig) -> ExecutionResult {
        let mut ctx = SortContext::new(config);
        let mut working = input.to_vec();
        ctx.record_boundary(&working, START_DESCRIPTION);

        let start = Instant::now();
        if working.len() > 1 {
            (self.procedure)(&mut ctx, &mut working);
        }
        let elapsed = start.elapsed();

        ctx.record_boundary(&working, FINISHED_DESCRIPTION);
        let metrics = Metrics {
            algorithm: self.kind,
            comparison_count: ctx.comparisons(),
            swap_count: ctx.swaps(),
            execution_time_nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            time_complexity: self.kind.time_complexity(),
            space_complexity: self.kind.space_complexity(),
        };
        ExecutionResult {
            final_array: working,
            steps: ctx.into_steps(),
            metrics,
        }
    }
}

// AlgorithmFactory

pub struct AlgorithmFactory;

impl AlgorithmFactory {
    pub fn create(kind: AlgorithmKind) -> SortAlgorithm {
        let procedure: SortProcedure = match kind {
            AlgorithmKind::Bubble => algorithms::bubble,
            AlgorithmKind::Selection => algorithms::selection,
            AlgorithmKind::Insertion => algorithms::insertion,
            AlgorithmKind::Shell => algorithms::shell,
            AlgorithmKind::Merge => algorithms::merge,
            AlgorithmKind::Quick => algorithms::quick,
            AlgorithmKind::Heap => algorithms::heap,
            AlgorithmKind::Counting => algorithms::counting,
            AlgorithmKind::Radix => algorithms::radix,
            AlgorithmKind::Bucket => algorithms::bucket,
            AlgorithmKind::Tim => algorithms::tim,
            AlgorithmKind::Comb => algorithms::comb,
            AlgorithmKind::Cocktail => algorithms::cocktail,
            AlgorithmKind::Gnome => algorithms::gnome,
            AlgorithmKind::OddEven => algorithms::odd_even,
            AlgorithmKind::Bogo => algorithms::bogo,
            AlgorithmKind::Bitonic => algorithms::bitonic,
        };
        SortAlgorithm { kind, procedure }
    }

    pub fn create_by_name(name: &str) -> EngineResult<SortAlgorithm> {
        AlgorithmKind::from_name(name).map(Self::create)
    }
}
