use thiserror::Error;

/// Failures talking to the engine task.
#[derive(Debug, Error)]
pub enum ActorError {
    /// The engine task has stopped and no longer accepts commands.
    #[error("engine task is closed")]
    Closed,
}

pub type ActorResult<T> = Result<T, ActorError>;
