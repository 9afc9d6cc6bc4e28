use crate::util::{is_http_token, split_list};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum AllowedHeaders {
    /// Reflect the request's `Access-Control-Request-Headers` and vary on it.
    #[default]
    MirrorRequest,
    /// Emitted verbatim. An empty string behaves like [`Self::MirrorRequest`].
    Raw(String),
    /// Joined with `,`. An empty list emits nothing.
    List(Vec<String>),
}

impl AllowedHeaders {
    pub fn raw<S: Into<String>>(value: S) -> Self {
        Self::Raw(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    pub fn is_mirror(&self) -> bool {
        match self {
            Self::MirrorRequest => true,
            Self::Raw(value) => value.is_empty(),
            Self::List(_) => false,
        }
    }

    /// Configured header value. `None` in mirror mode.
    pub fn header_value(&self) -> Option<String> {
        if self.is_mirror() {
            return None;
        }
        match self {
            Self::Raw(value) => Some(value.clone()),
            Self::List(values) => Some(values.join(",")),
            Self::MirrorRequest => None,
        }
    }

    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            Self::MirrorRequest => None,
            Self::Raw(value) => split_list(value).find(|entry| !is_http_token(entry)),
            Self::List(values) => values
                .iter()
                .map(|value| value.trim())
                .find(|entry| !is_http_token(entry)),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
