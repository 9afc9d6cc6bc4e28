use crate::context::RequestContext;
use crate::header_builder::compose;
use crate::options::{CorsOptions, CorsOverrides, ValidationError};
use crate::provider::OptionsProvider;
use crate::resolver::{Resolution, resolve};
use crate::response::{CorsResponse, Flow, apply_headers, finish_preflight};
use crate::result::{BoxError, CorsDecision, CorsError, PreflightResult, SimpleResult};
use futures::future::BoxFuture;

/// Core CORS policy engine. Cheap to share behind an `Arc`; requests are
/// evaluated independently.
#[derive(Debug, Clone)]
pub struct Cors {
    provider: OptionsProvider,
}

impl Cors {
    /// Engine with options fixed at setup time.
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Self::with_provider(OptionsProvider::Static(options))
    }

    pub fn with_provider(provider: OptionsProvider) -> Result<Self, ValidationError> {
        provider.validate()?;
        Ok(Self { provider })
    }

    /// Engine whose options are computed for every request and merged over
    /// the defaults.
    pub fn from_fn<F>(provider: F) -> Self
    where
        F: Fn(&RequestContext<'_>) -> BoxFuture<'static, Result<CorsOverrides, BoxError>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            provider: OptionsProvider::from_fn(provider),
        }
    }

    /// Decides which headers the request gets without touching a response.
    pub async fn check(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        let policy = match resolve(&self.provider, request).await? {
            Resolution::Skip => return Ok(CorsDecision::NotApplicable),
            Resolution::Resolved(policy) => policy,
        };

        if request.is_preflight() {
            let options = policy.options();
            Ok(CorsDecision::Preflight(PreflightResult {
                headers: compose(&policy, request, true),
                status: options.options_success_status,
                halt_response: !options.preflight_continue,
            }))
        } else {
            Ok(CorsDecision::Simple(SimpleResult {
                headers: compose(&policy, request, false),
            }))
        }
    }

    /// Runs the CORS stage against `response`.
    ///
    /// `Err` must be passed on to the next stage, [`Flow::Next`] continues the
    /// chain and [`Flow::Ended`] means the preflight response is complete.
    pub async fn handle<R>(
        &self,
        request: &RequestContext<'_>,
        response: &mut R,
    ) -> Result<Flow, CorsError>
    where
        R: CorsResponse + ?Sized,
    {
        match self.check(request).await? {
            CorsDecision::NotApplicable => Ok(Flow::Next),
            CorsDecision::Simple(result) => {
                apply_headers(response, &result.headers);
                Ok(Flow::Next)
            }
            CorsDecision::Preflight(result) => {
                apply_headers(response, &result.headers);
                if !result.halt_response {
                    return Ok(Flow::Next);
                }
                tracing::debug!(status = result.status, "finishing CORS preflight");
                finish_preflight(response, result.status);
                Ok(Flow::Ended)
            }
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
