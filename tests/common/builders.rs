use cors_policy_rs::constants::method;
use cors_policy_rs::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, ExposedHeaders, Origin,
    RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.options.max_age = Some(value);
        self
    }

    pub fn preflight_continue(mut self, enabled: bool) -> Self {
        self.options.preflight_continue = enabled;
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options.options_success_status = status;
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub async fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_headers: None,
        };
        cors.check(&ctx)
            .await
            .expect("simple request evaluation should succeed")
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub async fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
            .await
            .expect("preflight request evaluation should succeed")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
