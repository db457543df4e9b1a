//! # Host Errors
//!
//! Errors raised by the in-memory host. Callers such as the seed procedure propagate
//! these unmodified.

/// Errors that can occur while talking to a record actor.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Record actor closed")]
    ActorClosed,
    #[error("Record actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record rejected: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}
