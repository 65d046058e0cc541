#[cfg(test)]
mod tests {
    use sort_trace::{
        AlgorithmKind,
        ExecutionResult,
        SortExecutionService,
        execute,
    };

    fn inputs() -> Vec<Vec<i32>> {
        vec![
            vec![],
            vec![42],
            vec![1, 2],
            vec![2, 1],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
            vec![7, 7, 7, 7, 7, 7],
            vec![-3, 10, -7, 0, 0, 4, -3, 12, -100],
            (0..40).map(|i| (i * 37 % 23) - 11).collect(),
        ]
    }

    fn sorted_copy(values: &[i32]) -> Vec<i32> {
        let mut values = values.to_vec();
        values.sort();
        values
    }

    fn assert_consistent(input: &[i32], result: &ExecutionResult) {
        let kind = result.algorithm();
        assert_eq!(result.final_array, sorted_copy(input), "{kind} on {input:?}");

        let first = result.steps.first().expect("steps are never empty");
        let last = result.steps.last().expect("steps are never empty");
        assert_eq!(first.description, "Start");
        assert_eq!(first.array_state, input);
        assert!(first.highlighted.is_empty());
        assert_eq!(last.description, "Finished");
        assert_eq!(last.array_state, result.final_array);
        assert!(last.highlighted.is_empty());

        for step in &result.steps {
            assert!(
                step.highlighted.iter().all(|&idx| idx < step.array_state.len()),
                "{kind}: highlight out of range in '{}'",
                step.description
            );
        }
    }

    #[test]
    fn test_all_algorithms_sort_every_input() {
        println!("== All Algorithms ==");

        for kind in AlgorithmKind::ALL {
            for input in inputs() {
                let result = execute(kind, &input);
                assert_consistent(&input, &result);
            }
            println!("{kind} ok");
        }

        println!("== All Algorithms == success");
    }

    #[test]
    fn test_counters_for_trivial_inputs() {
        println!("== Trivial Inputs ==");

        for kind in AlgorithmKind::ALL {
            for input in [vec![], vec![5]] {
                let result = execute(kind, &input);
                assert_eq!(result.metrics.comparison_count, 0, "{kind}");
                assert_eq!(result.metrics.swap_count, 0, "{kind}");
                assert_eq!(result.steps.len(), 2, "{kind}");
            }
            let result = execute(kind, &[2, 1]);
            assert!(result.metrics.total_operations() > 0, "{kind}");
        }

        println!("== Trivial Inputs == success");
    }

    #[test]
    fn test_deterministic_algorithms_repeat() {
        println!("== Determinism ==");

        let input = vec![9, -2, 14, 3, 3, 0, -8, 27, 1, 5, 11, -4];
        for kind in AlgorithmKind::ALL.into_iter().filter(|k| *k != AlgorithmKind::Bogo) {
            let a = execute(kind, &input);
            let b = execute(kind, &input);
            assert_eq!(a.final_array, b.final_array);
            assert_eq!(a.metrics.comparison_count, b.metrics.comparison_count, "{kind}");
            assert_eq!(a.metrics.swap_count, b.metrics.swap_count, "{kind}");
            assert_eq!(a.steps, b.steps, "{kind}");
        }

        println!("== Determinism == success");
    }

    #[test]
    fn test_extreme_values() {
        let inputs = [
            vec![i32::MAX, i32::MIN, 0, -1, 1, i32::MAX],
            vec![i32::MAX, i32::MIN, 0],
            vec![0, 500_000_000, -7, 500_000_000],
        ];
        for kind in AlgorithmKind::ALL {
            for input in &inputs {
                let result = execute(kind, input);
                assert_consistent(input, &result);
            }
        }
    }

    #[test]
    fn test_long_sorted_and_reversed_inputs() {
        println!("== Long Ordered Inputs ==");

        let service = SortExecutionService::with_config(
            sort_trace::EngineConfig::new().with_max_snapshots(0),
        );
        let ascending: Vec<i32> = (0..20_000).collect();
        let descending: Vec<i32> = ascending.iter().rev().copied().collect();
        let kinds = AlgorithmKind::ALL.into_iter().filter(|&kind| {
            !matches!(
                kind,
                AlgorithmKind::Bubble
                    | AlgorithmKind::Selection
                    | AlgorithmKind::Insertion
                    | AlgorithmKind::Cocktail
                    | AlgorithmKind::Gnome
                    | AlgorithmKind::OddEven
                    | AlgorithmKind::Bogo
            )
        });
        for kind in kinds {
            for input in [&ascending, &descending] {
                let result = service.execute(kind, input);
                assert_eq!(result.final_array, ascending, "{kind}");
                assert_eq!(result.steps.len(), 2, "{kind}");
            }
        }

        println!("== Long Ordered Inputs == success");
    }

    #[test]
    fn test_metrics_labels() {
        for kind in AlgorithmKind::ALL {
            let result = execute(kind, &[3, 1, 2]);
            assert_eq!(result.metrics.algorithm, kind);
            assert_eq!(result.metrics.time_complexity, kind.time_complexity());
            assert_eq!(result.metrics.space_complexity, kind.space_complexity());
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![4, 3, 2, 1];
        for kind in AlgorithmKind::ALL {
            let _ = execute(kind, &input);
            assert_eq!(input, vec![4, 3, 2, 1]);
        }
    }

    #[test]
    fn test_snapshot_budget() {
        println!("== Snapshot Budget ==");

        let service = SortExecutionService::with_config(
            sort_trace::EngineConfig::new().with_max_snapshots(5),
        );
        let input: Vec<i32> = (0..30).rev().collect();
        for kind in AlgorithmKind::ALL {
            let result = service.execute(kind, &input);
            assert!(result.steps.len() <= 7, "{kind}: {}", result.steps.len());
            assert_consistent(&input, &result);
        }

        println!("== Snapshot Budget == success");
    }

    #[test]
    fn test_large_random_inputs() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(2024);
        let service = SortExecutionService::with_config(
            sort_trace::EngineConfig::new().with_max_snapshots(0),
        );
        for kind in AlgorithmKind::ALL {
            let input: Vec<i32> = (0..300).map(|_| rng.random_range(-1000..1000)).collect();
            let result = service.execute(kind, &input);
            assert_eq!(result.final_array, sorted_copy(&input), "{kind}");
            assert_eq!(result.steps.len(), 2);
        }
    }
}
