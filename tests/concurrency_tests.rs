#[cfg(test)]
mod tests {
    use rayon::prelude::*;
    use sort_trace::{
        AlgorithmKind,
        HistoryEvent,
        HistorySink,
        MemoryHistory,
        SortExecutionService,
    };
    use std::{sync::Arc, thread};

    fn input_for(seed: usize) -> Vec<i32> {
        (0..(20 + seed % 17))
            .map(|i| ((i * 31 + seed * 7) % 97) as i32 - 48)
            .collect()
    }

    #[test]
    fn test_parallel_executions_are_independent() {
        println!("== Parallel Executions ==");

        let service = SortExecutionService::new();
        let jobs: Vec<(AlgorithmKind, Vec<i32>)> = (0..68)
            .map(|i| (AlgorithmKind::ALL[i % AlgorithmKind::ALL.len()], input_for(i)))
            .collect();

        let results: Vec<_> = jobs
            .par_iter()
            .map(|(kind, input)| (input, service.execute(*kind, input)))
            .collect();

        for (input, result) in &results {
            let mut expected = (*input).clone();
            expected.sort();
            assert_eq!(result.final_array, expected);
            assert_eq!(&result.steps[0].array_state, *input);
            assert_eq!(result.steps.last().unwrap().array_state, expected);
            for step in &result.steps {
                assert_eq!(step.array_state.len(), input.len());
            }
        }

        println!("== Parallel Executions == success");
    }

    #[test]
    fn test_same_kind_on_threads_matches_sequential() {
        println!("== Same Kind On Threads ==");

        let service = Arc::new(SortExecutionService::new());
        let inputs: Vec<Vec<i32>> = (0..8).map(input_for).collect();
        let sequential: Vec<_> = inputs
            .iter()
            .map(|input| service.execute(AlgorithmKind::Quick, input))
            .collect();

        let handles: Vec<_> = inputs
            .iter()
            .cloned()
            .map(|input| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.execute(AlgorithmKind::Quick, &input))
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(sequential) {
            let result = handle.join().unwrap();
            assert_eq!(result.final_array, expected.final_array);
            assert_eq!(result.metrics.comparison_count, expected.metrics.comparison_count);
            assert_eq!(result.metrics.swap_count, expected.metrics.swap_count);
            assert_eq!(result.steps, expected.steps);
        }

        println!("== Same Kind On Threads == success");
    }

    #[test]
    fn test_compare_side_by_side() {
        let input = input_for(5);
        let results = SortExecutionService::new().compare(&AlgorithmKind::ALL, &input);
        assert_eq!(results.len(), AlgorithmKind::ALL.len());
        for (kind, result) in AlgorithmKind::ALL.iter().zip(&results) {
            assert_eq!(result.algorithm(), *kind);
            assert!(result.is_sorted());
        }
    }

    #[test]
    fn test_history_concurrent_writers() {
        let history = MemoryHistory::new();
        let service = SortExecutionService::new();
        thread::scope(|s| {
            for t in 0..4 {
                let history = history.clone();
                s.spawn(move || {
                    for i in 0..25 {
                        let kind = AlgorithmKind::ALL[(t + i) % 3];
                        let result = service.execute(kind, &input_for(i));
                        history.record(HistoryEvent::executed(&result));
                    }
                });
            }
        });
        assert_eq!(history.len(), 100);
    }
}
