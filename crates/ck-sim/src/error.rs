use ck_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `dequeue`/`peek` on an empty line.  The engine guards every call
    /// behind `is_empty`, so this surfaces only from direct queue misuse —
    /// a programmer error, not a recoverable runtime condition.
    #[error("wait queue is empty")]
    EmptyQueue,

    #[error("invalid simulation configuration: {0}")]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
