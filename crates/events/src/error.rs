use thiserror::Error;

/// Errors a handler can report while reacting to an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The handler ran but could not complete its reaction.
    #[error("Handler failed: {0}")]
    Failed(String),

    /// The handler was given an event kind it does not understand.
    #[error("Unexpected event: expected {expected}, got {actual}")]
    UnexpectedEvent {
        expected: &'static str,
        actual: &'static str,
    },

    /// The handler panicked; the panic was contained by the dispatcher.
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

impl HandlerError {
    /// Creates a [`HandlerError::Failed`] from any message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;
