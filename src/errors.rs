use std::fmt::Display;

#[derive(Debug,Clone,PartialEq,Eq)]
pub enum GeneratorError {
    InvertedRange{
        start: i32,
        end: i32,
    },
    UnknownPolicy{
        name: String,
    },
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedRange { start, end } => write!(
                f,"value range is inverted: start {start} is greater than end {end}"
            ),
            Self::UnknownPolicy { name } => write!(f,"unknown generator policy: '{name}'"),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[derive(Debug,Clone,PartialEq,Eq)]
pub enum EngineError {
    UnsupportedAlgorithm{
        name: String,
    },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { name } => write!(f,"unsupported algorithm: '{name}'"),
        }
    }
}

impl std::error::Error for EngineError {}
