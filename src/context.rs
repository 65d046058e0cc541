use super::{
    config::EngineConfig,
    model::{
        Highlights,
        Snapshot,
    },
};
use std::cmp::Ordering;

// SortContext - счетчики и снимки одного запуска
//
// Принадлежит вызывающему коду и передается в алгоритм явно,
// поэтому параллельные запуски ничего не разделяют.

pub struct SortContext {
    config: EngineConfig,
    comparisons: u64,
    swaps: u64,
    steps: Vec<Snapshot>,
    intermediate: usize,
    dropped: usize,
}

impl SortContext {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            comparisons: 0,
            swaps: 0,
            steps: Vec::new(),
            intermediate: 0,
            dropped: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // Primitives

    #[inline]
    pub fn compare(&mut self, a: i32, b: i32) -> Ordering {
        self.comparisons += 1;
        a.cmp(&b)
    }

    #[inline]
    pub fn greater(&mut self, a: i32, b: i32) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    #[inline]
    pub fn less(&mut self, a: i32, b: i32) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[inline]
    pub fn swap(&mut self, data: &mut [i32], i: usize, j: usize) {
        data.swap(i, j);
        self.swaps += 1;
    }

    // Финальная запись значения на место считается одним swap
    #[inline]
    pub fn write(&mut self, data: &mut [i32], index: usize, value: i32) {
        data[index] = value;
        self.swaps += 1;
    }

    // Минимум и максимум через инструментированное сравнение
    pub fn min_max(&mut self, data: &[i32]) -> Option<(i32, i32)> {
        let (&first, rest) = data.split_first()?;
        let mut min = first;
        let mut max = first;
        for &value in rest {
            if self.less(value, min) {
                min = value;
            } else if self.greater(value, max) {
                max = value;
            }
        }
        Some((min, max))
    }

    // Snapshots

    pub fn record(&mut self, data: &[i32], highlighted: &[usize], description: impl Into<String>) {
        if !self.reserve_snapshot() {
            return;
        }
        self.push(data, highlighted, description.into());
    }

    // Кадр строится только если укладывается в лимит
    pub fn record_with<F>(&mut self, description: impl Into<String>, frame: F)
    where
        F: FnOnce() -> (Vec<i32>, Vec<usize>),
    {
        if !self.reserve_snapshot() {
            return;
        }
        let (data, highlighted) = frame();
        self.push(&data, &highlighted, description.into());
    }

    fn reserve_snapshot(&mut self) -> bool {
        if let Some(limit) = self.config.max_snapshots {
            if self.intermediate >= limit {
                self.dropped += 1;
                return false;
            }
        }
        self.intermediate += 1;
        true
    }

    // Start/Finished не подпадают под лимит
    pub(crate) fn record_boundary(&mut self, data: &[i32], description: &str) {
        self.push(data, &[], description.to_string());
    }

    fn push(&mut self, data: &[i32], highlighted: &[usize], description: String) {
        let highlighted: Highlights = highlighted
            .iter()
            .copied()
            .filter(|&idx| idx < data.len())
            .collect();
        self.steps.push(Snapshot::new(data.to_vec(), highlighted, description));
    }

    // Accessors

    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    #[inline]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    #[inline]
    pub fn steps(&self) -> &[Snapshot] {
        &self.steps
    }

    #[inline]
    pub fn dropped_snapshots(&self) -> usize {
        self.dropped
    }

    pub(crate) fn into_steps(self) -> Vec<Snapshot> {
        self.steps
    }
}
