use crate::util::{is_http_token, split_list};

/// Configuration for the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExposedHeaders {
    Raw(String),
    List(Vec<String>),
}

impl ExposedHeaders {
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

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        let value = match self {
            Self::Raw(value) => value.clone(),
            Self::List(values) => values.join(","),
        };
        if value.is_empty() { None } else { Some(value) }
    }

    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            Self::Raw(value) => split_list(value).find(|entry| !is_http_token(entry)),
            Self::List(values) => values
                .iter()
                .map(|value| value.trim())
                .find(|entry| !is_http_token(entry)),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
