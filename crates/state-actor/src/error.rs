use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Condition not met within {0:?}")]
    Timeout(Duration),
    #[error("Model error: {0}")]
    ModelError(Box<dyn std::error::Error + Send + Sync>),
}
