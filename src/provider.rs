use crate::context::RequestContext;
use crate::options::{CorsOptions, CorsOverrides, ValidationError};
use crate::result::{BoxError, CorsError};
use futures::future::BoxFuture;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Builds the options for one request. The returned future must not borrow
/// the request; copy whatever it needs before the `async` block.
pub type OptionsProviderFn = dyn Fn(&RequestContext<'_>) -> BoxFuture<'static, Result<CorsOverrides, BoxError>>
    + Send
    + Sync;

/// Source of the options applied to each request.
#[derive(Clone)]
pub enum OptionsProvider {
    /// Options fixed at setup time.
    Static(CorsOptions),
    /// Overrides computed per request and merged over the defaults.
    Dynamic(Arc<OptionsProviderFn>),
}

impl OptionsProvider {
    pub fn from_fn<F>(provider: F) -> Self
    where
        F: Fn(&RequestContext<'_>) -> BoxFuture<'static, Result<CorsOverrides, BoxError>>
            + Send
            + Sync
            + 'static,
    {
        Self::Dynamic(Arc::new(provider))
    }

    /// Checks static options up front. Dynamic options are checked per request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            OptionsProvider::Static(options) => options.validate(),
            OptionsProvider::Dynamic(_) => Ok(()),
        }
    }

    pub(crate) async fn provide(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<Cow<'_, CorsOptions>, CorsError> {
        match self {
            OptionsProvider::Static(options) => Ok(Cow::Borrowed(options)),
            OptionsProvider::Dynamic(provider) => {
                let overrides = provider(request).await.map_err(CorsError::Provider)?;
                let options = CorsOptions::defaults().merge(overrides);
                options.validate()?;
                Ok(Cow::Owned(options))
            }
        }
    }
}

impl From<CorsOptions> for OptionsProvider {
    fn from(options: CorsOptions) -> Self {
        Self::Static(options)
    }
}

impl From<CorsOverrides> for OptionsProvider {
    fn from(overrides: CorsOverrides) -> Self {
        Self::Static(CorsOptions::defaults().merge(overrides))
    }
}

impl fmt::Debug for OptionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsProvider::Static(options) => f.debug_tuple("Static").field(options).finish(),
            OptionsProvider::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
