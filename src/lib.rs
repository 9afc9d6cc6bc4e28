//! CORS policy resolution and header composition.
//!
//! A [`Cors`] engine turns static or per-request [`CorsOptions`] into the
//! response headers for preflight and actual requests. Origins may be fixed,
//! reflected from an allow-list, or decided by an asynchronous callback.

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod provider;
mod resolver;
mod response;
mod result;
mod util;
pub mod vary;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::CorsConfig;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use header_builder::compose;
pub use headers::{Header, Headers};
pub use options::{CorsOptions, CorsOverrides, ValidationError};
pub use origin::{Origin, OriginCallbackFn, OriginDecision, OriginMatcher, PatternError};
pub use provider::{OptionsProvider, OptionsProviderFn};
pub use resolver::{Resolution, ResolvedPolicy, resolve};
pub use response::{BufferedResponse, CorsResponse, Flow, apply_headers};
pub use result::{BoxError, CorsDecision, CorsError, PreflightResult, SimpleResult};
pub use util::{equals_ignore_case, normalize_lower};
