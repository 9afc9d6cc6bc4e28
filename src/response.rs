use crate::constants::header;
use crate::headers::Headers;
use crate::vary;

/// The parts of an HTTP response the CORS engine writes to.
pub trait CorsResponse {
    /// Current value of `name`, looked up case-insensitively.
    fn header(&self, name: &str) -> Option<String>;
    fn set_header(&mut self, name: &str, value: &str);
    fn set_status(&mut self, status: u16);
    /// Finalizes the response without a body.
    fn end(&mut self);
}

/// What the caller does after [`crate::Cors::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Hand the request to the next stage.
    Next,
    /// The response was finalized; the next stage must not run.
    Ended,
}

/// Writes composed headers onto a response, merging `Vary` into whatever the
/// response already carries and skipping empty values.
pub fn apply_headers<R>(response: &mut R, headers: &Headers)
where
    R: CorsResponse + ?Sized,
{
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            let existing = response.header(header::VARY);
            if let Some(merged) = vary::append(existing.as_deref(), value) {
                response.set_header(header::VARY, &merged);
            }
        } else if !value.is_empty() {
            response.set_header(name, value);
        }
    }
}

pub(crate) fn finish_preflight<R>(response: &mut R, status: u16)
where
    R: CorsResponse + ?Sized,
{
    response.set_status(status);
    // Some clients wait for a body on 204 unless the length is explicit.
    response.set_header(header::CONTENT_LENGTH, "0");
    response.end();
}

/// In-memory response, for hosts that build their framework response after
/// the CORS stage has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    pub headers: Headers,
    pub status: Option<u16>,
    pub ended: bool,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CorsResponse for BufferedResponse {
    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                if let Some((_, slot)) = self.headers.get_index_mut(index) {
                    *slot = value.to_string();
                }
            }
            None => {
                self.headers.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn end(&mut self) {
        self.ended = true;
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
