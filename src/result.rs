use super::errors::{
    EngineError,
    GeneratorError,
};

pub type EngineResult<T> = Result<T,EngineError>;
pub type GeneratorResult<T> = Result<T,GeneratorError>;
