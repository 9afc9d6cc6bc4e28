use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::{Header, HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::origin::OriginDecision;
use crate::resolver::ResolvedPolicy;

/// Builds the CORS response headers for a resolved policy.
///
/// Preflight responses carry origin, credentials, methods, allowed headers,
/// max age and exposed headers, in that order. Actual responses carry only
/// origin, credentials and exposed headers.
pub fn compose(
    policy: &ResolvedPolicy<'_>,
    request: &RequestContext<'_>,
    is_preflight: bool,
) -> Headers {
    let builder = HeaderBuilder::new(policy.options(), policy.origin());
    let mut headers = HeaderCollection::new();

    headers.extend(builder.build_origin_headers());
    headers.extend(builder.build_credentials_header());
    if is_preflight {
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());
    }
    headers.extend(builder.build_exposed_headers());

    headers.into_headers()
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
    origin: &'a OriginDecision,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions, origin: &'a OriginDecision) -> Self {
        Self { options, origin }
    }

    pub(crate) fn build_origin_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match self.origin {
            OriginDecision::Any => {
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD));
            }
            OriginDecision::Exact(value) | OriginDecision::Mirror(value) => {
                headers.push(Header::new(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    value.as_str(),
                ));
            }
            OriginDecision::Disallow | OriginDecision::Skip => {}
        }
        if self.origin.varies_on_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials {
            headers.push(Header::new(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                "true",
            ));
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(methods) = self.options.methods.header_value() {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, methods));
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.allowed_headers.is_mirror() {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
            if let Some(requested) = request.access_control_request_headers {
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_HEADERS, requested));
            }
        } else if let Some(value) = self.options.allowed_headers.header_value() {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_HEADERS, value));
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(max_age) = self.options.max_age {
            headers.push(Header::new(
                header::ACCESS_CONTROL_MAX_AGE,
                max_age.to_string(),
            ));
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self
            .options
            .exposed_headers
            .as_ref()
            .and_then(|exposed| exposed.header_value())
        {
            headers.push(Header::new(header::ACCESS_CONTROL_EXPOSE_HEADERS, value));
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
