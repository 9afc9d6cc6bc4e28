use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Fully specified CORS configuration.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: Option<ExposedHeaders>,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub preflight_continue: bool,
    pub options_success_status: u16,
}

static DEFAULTS: Lazy<CorsOptions> = Lazy::new(|| CorsOptions {
    origin: Origin::Any,
    methods: AllowedMethods::default(),
    allowed_headers: AllowedHeaders::MirrorRequest,
    exposed_headers: None,
    credentials: false,
    max_age: None,
    preflight_continue: false,
    options_success_status: 204,
});

impl Default for CorsOptions {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

/// Partial configuration. `None` fields keep the value they are merged over.
#[derive(Clone, Debug, Default)]
pub struct CorsOverrides {
    pub origin: Option<Origin>,
    pub methods: Option<AllowedMethods>,
    pub allowed_headers: Option<AllowedHeaders>,
    /// Legacy name for `allowed_headers`, consulted when that one is unset.
    pub headers: Option<AllowedHeaders>,
    pub exposed_headers: Option<ExposedHeaders>,
    pub credentials: Option<bool>,
    pub max_age: Option<u64>,
    pub preflight_continue: Option<bool>,
    pub options_success_status: Option<u16>,
}

impl From<CorsOptions> for CorsOverrides {
    fn from(options: CorsOptions) -> Self {
        Self {
            origin: Some(options.origin),
            methods: Some(options.methods),
            allowed_headers: Some(options.allowed_headers),
            headers: None,
            exposed_headers: options.exposed_headers,
            credentials: Some(options.credentials),
            max_age: options.max_age,
            preflight_continue: Some(options.preflight_continue),
            options_success_status: Some(options.options_success_status),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("'{0}' is not a valid allowed header name")]
    InvalidAllowedHeader(String),
    #[error("'{0}' is not a valid exposed header name")]
    InvalidExposedHeader(String),
    #[error("origin value {0:?} contains control characters")]
    InvalidOrigin(String),
    #[error("options success status {0} is outside 100..=599")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    /// The immutable built-in defaults.
    pub fn defaults() -> &'static CorsOptions {
        &DEFAULTS
    }

    /// Shallow merge: every field set in `overrides` replaces the value in
    /// `self`, every unset field is kept. `self` is left untouched.
    pub fn merge(&self, overrides: CorsOverrides) -> CorsOptions {
        let CorsOverrides {
            origin,
            methods,
            allowed_headers,
            headers,
            exposed_headers,
            credentials,
            max_age,
            preflight_continue,
            options_success_status,
        } = overrides;

        let allowed_headers = match (allowed_headers, headers) {
            (Some(primary), Some(alias)) if primary.is_mirror() => alias,
            (Some(primary), _) => primary,
            (None, Some(alias)) => alias,
            (None, None) => self.allowed_headers.clone(),
        };

        CorsOptions {
            origin: origin.unwrap_or_else(|| self.origin.clone()),
            methods: methods.unwrap_or_else(|| self.methods.clone()),
            allowed_headers,
            exposed_headers: exposed_headers.or_else(|| self.exposed_headers.clone()),
            credentials: credentials.unwrap_or(self.credentials),
            max_age: max_age.or(self.max_age),
            preflight_continue: preflight_continue.unwrap_or(self.preflight_continue),
            options_success_status: options_success_status.unwrap_or(self.options_success_status),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Origin::Exact(value) = &self.origin
            && value.chars().any(char::is_control)
        {
            return Err(ValidationError::InvalidOrigin(value.clone()));
        }

        if let Some(entry) = self.methods.invalid_entry() {
            return Err(ValidationError::InvalidMethod(entry.to_string()));
        }

        if let Some(entry) = self.allowed_headers.invalid_entry() {
            return Err(ValidationError::InvalidAllowedHeader(entry.to_string()));
        }

        if let Some(entry) = self
            .exposed_headers
            .as_ref()
            .and_then(ExposedHeaders::invalid_entry)
        {
            return Err(ValidationError::InvalidExposedHeader(entry.to_string()));
        }

        if !(100..=599).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
