use crate::constants::WILDCARD;
use crate::result::{BoxError, CorsError};
use futures::future::BoxFuture;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Asynchronous origin decision. Receives the request `Origin` header and
/// yields the allow-set to apply to this request.
pub type OriginCallbackFn =
    dyn Fn(Option<&str>) -> BoxFuture<'static, Result<Origin, BoxError>> + Send + Sync;

/// Allow-set for `Access-Control-Allow-Origin`.
#[derive(Clone, Default)]
pub enum Origin {
    /// Emit `*`.
    #[default]
    Any,
    /// `true` reflects any request origin, `false` disables CORS for the request.
    Bool(bool),
    /// Fixed value. `"*"` behaves like [`Origin::Any`], `""` like `Bool(false)`.
    Exact(String),
    Pattern(Regex),
    List(Vec<OriginMatcher>),
    Custom(Arc<OriginCallbackFn>),
}

/// Concrete per-request outcome of origin resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    /// Request origin is allowed and echoed back.
    Mirror(String),
    /// Request origin is not allowed; the allow header is omitted.
    Disallow,
    /// CORS does not apply to this request.
    Skip,
}

impl OriginDecision {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn mirror<S: Into<String>>(value: S) -> Self {
        Self::Mirror(value.into())
    }

    pub fn disallow() -> Self {
        Self::Disallow
    }

    pub fn skip() -> Self {
        Self::Skip
    }

    /// Whether the response depends on the request `Origin` header.
    pub fn varies_on_origin(&self) -> bool {
        matches!(self, Self::Exact(_) | Self::Mirror(_) | Self::Disallow)
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

/// One element of an origin allow-list.
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
    Bool(bool),
    List(Vec<OriginMatcher>),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Exact entries compare byte for byte; nested lists match if any element does.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
            OriginMatcher::Bool(value) => *value,
            OriginMatcher::List(matchers) => matchers.iter().any(|m| m.matches(candidate)),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<bool> for OriginMatcher {
    fn from(value: bool) -> Self {
        OriginMatcher::Bool(value)
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

impl From<Vec<OriginMatcher>> for OriginMatcher {
    fn from(value: Vec<OriginMatcher>) -> Self {
        OriginMatcher::List(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    /// Reflects every request origin.
    pub fn mirror() -> Self {
        Self::Bool(true)
    }

    /// Skips CORS handling for every request.
    pub fn disabled() -> Self {
        Self::Bool(false)
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Decides the allow-set per request. The callback is awaited exactly once.
    ///
    /// ```
    /// use cors_policy_rs::{BoxError, Origin};
    /// use futures::FutureExt;
    ///
    /// let origin = Origin::custom(|request_origin| {
    ///     let allowed = request_origin.is_some_and(|o| o.ends_with(".example.com"));
    ///     async move { Ok::<_, BoxError>(Origin::Bool(allowed)) }.boxed()
    /// });
    /// # let _ = origin;
    /// ```
    pub fn custom<F>(callback: F) -> Self
    where
        F: Fn(Option<&str>) -> BoxFuture<'static, Result<Origin, BoxError>>
            + Send
            + Sync
            + 'static,
    {
        Self::Custom(Arc::new(callback))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Origin::Custom(_))
    }

    /// Resolves the allow-set against the request origin, awaiting the
    /// callback when the origin is dynamic.
    pub async fn resolve(
        &self,
        request_origin: Option<&str>,
    ) -> Result<OriginDecision, CorsError> {
        match self {
            Origin::Custom(callback) => {
                let resolved = callback(request_origin)
                    .await
                    .map_err(CorsError::OriginCallback)?;
                resolved.decide(request_origin)
            }
            other => other.decide(request_origin),
        }
    }

    fn decide(&self, request_origin: Option<&str>) -> Result<OriginDecision, CorsError> {
        let decision = match self {
            Origin::Any => OriginDecision::Any,
            Origin::Bool(false) => OriginDecision::Skip,
            Origin::Exact(value) if value.is_empty() => OriginDecision::Skip,
            Origin::Exact(value) if value == WILDCARD => OriginDecision::Any,
            Origin::Exact(value) => OriginDecision::Exact(value.clone()),
            Origin::Bool(true) => Self::reflect(request_origin, |_| true),
            Origin::Pattern(regex) => {
                Self::reflect(request_origin, |origin| regex.is_match(origin.as_bytes()))
            }
            Origin::List(matchers) => Self::reflect(request_origin, |origin| {
                matchers.iter().any(|matcher| matcher.matches(origin))
            }),
            Origin::Custom(_) => return Err(CorsError::NestedOriginCallback),
        };
        Ok(decision)
    }

    fn reflect(request_origin: Option<&str>, allowed: impl Fn(&str) -> bool) -> OriginDecision {
        match request_origin {
            Some(origin) if allowed(origin) => OriginDecision::Mirror(origin.to_string()),
            _ => OriginDecision::Disallow,
        }
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Any => f.write_str("Any"),
            Origin::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::Pattern(regex) => f.debug_tuple("Pattern").field(regex).finish(),
            Origin::List(matchers) => f.debug_tuple("List").field(matchers).finish(),
            Origin::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<bool> for Origin {
    fn from(value: bool) -> Self {
        Origin::Bool(value)
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Exact(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Exact(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
