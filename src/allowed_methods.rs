use crate::constants::method;
use crate::util::{is_http_token, split_list};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emitted verbatim, e.g. `"GET,POST"`.
    Raw(String),
    /// Joined with `,`. Case-sensitive to preserve caller intent.
    List(Vec<String>),
}

impl AllowedMethods {
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

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Raw(value) if value.is_empty() => None,
            AllowedMethods::Raw(value) => Some(value.clone()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(",")),
        }
    }

    /// First entry that is not a valid HTTP method token.
    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            AllowedMethods::Raw(value) => split_list(value).find(|entry| !is_http_token(entry)),
            AllowedMethods::List(values) => values
                .iter()
                .map(|value| value.trim())
                .find(|entry| !is_http_token(entry)),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::raw(
            [
                method::GET,
                method::HEAD,
                method::PUT,
                method::PATCH,
                method::POST,
                method::DELETE,
            ]
            .join(","),
        )
    }
}

impl From<&str> for AllowedMethods {
    fn from(value: &str) -> Self {
        Self::raw(value)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
