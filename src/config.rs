//! Deserializable configuration, e.g. a `[cors]` table in a TOML file.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, CorsOverrides};
use crate::origin::{Origin, OriginMatcher, PatternError};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OriginConfig {
    Bool(bool),
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Declarative CORS settings. Field names accept both `snake_case` and the
/// `camelCase` spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    pub origin: Option<OriginConfig>,
    /// Regular expressions added to the origin allow-list.
    #[serde(default, alias = "originPatterns")]
    pub origin_patterns: Vec<String>,
    pub methods: Option<StringOrList>,
    #[serde(alias = "allowedHeaders")]
    pub allowed_headers: Option<StringOrList>,
    pub headers: Option<StringOrList>,
    #[serde(alias = "exposedHeaders")]
    pub exposed_headers: Option<StringOrList>,
    pub credentials: Option<bool>,
    #[serde(alias = "maxAge")]
    pub max_age: Option<u64>,
    #[serde(alias = "preflightContinue")]
    pub preflight_continue: Option<bool>,
    #[serde(alias = "optionsSuccessStatus")]
    pub options_success_status: Option<u16>,
}

impl CorsConfig {
    pub fn into_overrides(self) -> Result<CorsOverrides, PatternError> {
        let origin = Self::origin(self.origin, &self.origin_patterns)?;

        Ok(CorsOverrides {
            origin,
            methods: self.methods.map(|value| match value {
                StringOrList::One(raw) => AllowedMethods::raw(raw),
                StringOrList::Many(list) => AllowedMethods::list(list),
            }),
            allowed_headers: self.allowed_headers.map(Self::allowed_headers),
            headers: self.headers.map(Self::allowed_headers),
            exposed_headers: self.exposed_headers.map(|value| match value {
                StringOrList::One(raw) => ExposedHeaders::raw(raw),
                StringOrList::Many(list) => ExposedHeaders::list(list),
            }),
            credentials: self.credentials,
            max_age: self.max_age,
            preflight_continue: self.preflight_continue,
            options_success_status: self.options_success_status,
        })
    }

    /// Merges the settings over the built-in defaults.
    pub fn into_options(self) -> Result<CorsOptions, PatternError> {
        Ok(CorsOptions::defaults().merge(self.into_overrides()?))
    }

    fn allowed_headers(value: StringOrList) -> AllowedHeaders {
        match value {
            StringOrList::One(raw) => AllowedHeaders::raw(raw),
            StringOrList::Many(list) => AllowedHeaders::list(list),
        }
    }

    fn origin(
        origin: Option<OriginConfig>,
        patterns: &[String],
    ) -> Result<Option<Origin>, PatternError> {
        if patterns.is_empty() {
            return Ok(origin.map(|value| match value {
                OriginConfig::Bool(flag) => Origin::Bool(flag),
                OriginConfig::One(value) => Origin::Exact(value),
                OriginConfig::Many(values) => Origin::list(values),
            }));
        }

        let mut matchers = match origin {
            None => Vec::new(),
            Some(OriginConfig::Bool(flag)) => vec![OriginMatcher::Bool(flag)],
            Some(OriginConfig::One(value)) => vec![OriginMatcher::Exact(value)],
            Some(OriginConfig::Many(values)) => {
                values.into_iter().map(OriginMatcher::Exact).collect()
            }
        };
        for pattern in patterns {
            matchers.push(OriginMatcher::pattern_str(pattern)?);
        }

        Ok(Some(Origin::List(matchers)))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
