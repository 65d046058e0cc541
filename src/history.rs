use super::{
    kind::AlgorithmKind,
    model::ExecutionResult,
};
use parking_lot::RwLock;
use std::{
    collections::BTreeMap,
    sync::Arc,
    time::SystemTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Executed,
    Compared,
    QuizAnswered,
}

#[derive(Debug, Clone)]
pub struct HistoryEvent {
    pub algorithm: AlgorithmKind,
    pub event: EventType,
    pub metadata: BTreeMap<String, String>,
    pub timestamp: SystemTime,
}

impl HistoryEvent {
    pub fn new(algorithm: AlgorithmKind, event: EventType) -> Self {
        Self {
            algorithm,
            event,
            metadata: BTreeMap::new(),
            timestamp: SystemTime::now(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl ToString) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    // Событие о завершенном запуске с основными метриками
    pub fn executed(result: &ExecutionResult) -> Self {
        let metrics = &result.metrics;
        Self::new(metrics.algorithm, EventType::Executed)
            .with_metadata("size", result.final_array.len())
            .with_metadata("comparisons", metrics.comparison_count)
            .with_metadata("swaps", metrics.swap_count)
            .with_metadata("nanos", metrics.execution_time_nanos)
    }
}

// Движок сам не пишет в историю - это делает вызывающий код после получения результата
pub trait HistorySink: Send + Sync {
    fn record(&self, event: HistoryEvent);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    events: Arc<RwLock<Vec<HistoryEvent>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HistoryEvent> {
        self.events.read().clone()
    }

    pub fn events_for(&self, algorithm: AlgorithmKind) -> Vec<HistoryEvent> {
        self.events
            .read()
            .iter()
            .filter(|event| event.algorithm == algorithm)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl HistorySink for MemoryHistory {
    fn record(&self, event: HistoryEvent) {
        self.events.write().push(event);
    }
}
