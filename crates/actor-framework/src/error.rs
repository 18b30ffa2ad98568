//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the domain errors each
//! entity defines through [`ActorEntity::Error`](crate::ActorEntity::Error).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Persistence error: {0}")]
    Persistence(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps any storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        FrameworkError::Persistence(Box::new(err))
    }
}
