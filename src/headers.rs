use crate::constants::header;
use crate::vary;
use indexmap::IndexMap;

/// Response headers in the order they were composed.
pub type Headers = IndexMap<String, String>;

/// A single header directive produced by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a directive. Empty values are omitted and `Vary` is merged.
    pub(crate) fn push(&mut self, header: Header) {
        let Header { name, value } = header;
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(&value);
        } else if !value.is_empty() {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn add_vary(&mut self, value: &str) {
        let existing = self.headers.get(header::VARY).map(String::as_str);
        match vary::append(existing, value) {
            Some(merged) => {
                self.headers.insert(header::VARY.to_string(), merged);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(Header { name, value });
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
