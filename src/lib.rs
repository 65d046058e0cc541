pub mod algorithms;
pub mod config;
pub mod context;
pub mod errors;
pub mod factory;
pub mod generator;
pub mod history;
pub mod kind;
pub mod model;
pub mod result;
pub mod service;

pub use config::{BogoConfig, EngineConfig};
pub use context::SortContext;
pub use errors::{EngineError, GeneratorError};
pub use factory::{AlgorithmFactory, SortAlgorithm};
pub use generator::{GeneratorPolicy, SequenceGenerator};
pub use history::{EventType, HistoryEvent, HistorySink, MemoryHistory};
pub use kind::AlgorithmKind;
pub use model::{ExecutionResult, Metrics, Snapshot};
pub use result::{EngineResult, GeneratorResult};
pub use service::{execute, SortExecutionService};
