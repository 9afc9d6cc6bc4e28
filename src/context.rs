use crate::constants::method;

/// Request fields the CORS engine reads. Header values are `None` when absent.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_request_headers(mut self, headers: &'a str) -> Self {
        self.access_control_request_headers = Some(headers);
        self
    }

    pub fn is_preflight(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case(method::OPTIONS)
    }
}
