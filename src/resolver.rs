use crate::context::RequestContext;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;
use crate::provider::OptionsProvider;
use crate::result::CorsError;
use std::borrow::Cow;

/// Options for a single request with the origin already decided.
#[derive(Debug, Clone)]
pub struct ResolvedPolicy<'a> {
    options: Cow<'a, CorsOptions>,
    origin: OriginDecision,
}

impl<'a> ResolvedPolicy<'a> {
    pub fn new(options: Cow<'a, CorsOptions>, origin: OriginDecision) -> Self {
        Self { options, origin }
    }

    /// Concrete origin outcome for this request.
    pub fn origin(&self) -> &OriginDecision {
        &self.origin
    }

    /// Merged options. Their `origin` field is the configured allow-set, not
    /// the outcome; use [`Self::origin`] for that.
    pub fn options(&self) -> &CorsOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// No origin applies; the request continues without CORS headers.
    Skip,
    Resolved(ResolvedPolicy<'a>),
}

/// Runs the provider, then resolves the origin against the request.
pub async fn resolve<'a>(
    provider: &'a OptionsProvider,
    request: &RequestContext<'_>,
) -> Result<Resolution<'a>, CorsError> {
    let options = provider.provide(request).await.inspect_err(|err| {
        tracing::warn!(error = %err, "CORS options provider failed");
    })?;

    let origin = options
        .origin
        .resolve(request.origin)
        .await
        .inspect_err(|err| {
            tracing::warn!(error = %err, request_origin = ?request.origin, "CORS origin resolution failed");
        })?;

    match &origin {
        OriginDecision::Skip => {
            tracing::debug!(request_origin = ?request.origin, "no CORS origin resolved, skipping headers");
            return Ok(Resolution::Skip);
        }
        OriginDecision::Disallow => {
            tracing::debug!(request_origin = ?request.origin, "request origin not allowed");
        }
        decision => {
            tracing::trace!(?decision, "resolved CORS origin");
        }
    }

    Ok(Resolution::Resolved(ResolvedPolicy::new(options, origin)))
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
