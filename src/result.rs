use crate::headers::Headers;
use crate::options::ValidationError;
use thiserror::Error;

/// Boxed error produced by user supplied providers and origin callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Headers and response metadata emitted for a preflight request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
    /// `false` when the preflight must be handed to the next stage untouched.
    pub halt_response: bool,
}

/// Headers emitted for an actual (non-preflight) request.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// Origin resolved to nothing; continue without CORS headers.
    NotApplicable,
}

/// Request-scoped errors; each one is handed to the next stage once.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("CORS options provider failed: {0}")]
    Provider(#[source] BoxError),
    #[error("CORS origin callback failed: {0}")]
    OriginCallback(#[source] BoxError),
    #[error("origin callback resolved to another origin callback")]
    NestedOriginCallback,
    #[error("CORS options produced for this request are invalid: {0}")]
    InvalidOptions(#[from] ValidationError),
}

impl CorsError {
    /// Returns the error raised by a provider or origin callback unchanged.
    pub fn into_source(self) -> BoxError {
        match self {
            CorsError::Provider(err) | CorsError::OriginCallback(err) => err,
            other => Box::new(other),
        }
    }
}
