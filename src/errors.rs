use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Physics error: {0}")]
    PhysicsError(String),

    #[error("Audio error: {0}")]
    AudioError(String),

    #[error("Scene error: {0}")]
    SceneError(String),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
