//! Base URL configuration.
//!
//! The site may be served below a path prefix. The prefix is read once at
//! startup from `CLUBROOM_BASE_URL`; wasm builds capture it at compile time.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::error::ConfigError;

/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "CLUBROOM_BASE_URL";

/// Prefix used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "/";

/// Normalised path prefix applied to every generated link.
///
/// Always starts and ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parse and normalise a configured prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value carries a scheme,
    /// query, fragment, or whitespace.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        let reject = |reason| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason,
        };
        if trimmed.contains("://") {
            return Err(reject("base url must be a path, not an absolute url"));
        }
        if trimmed.contains(['?', '#']) {
            return Err(reject("base url must not contain a query or fragment"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(reject("base url must not contain whitespace"));
        }

        let inner = trimmed.trim_matches('/');
        if inner.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(format!("/{inner}/")))
    }

    /// Read the prefix from the environment, defaulting to `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the configured value is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        configured_value().map_or_else(|| Ok(Self::root()), |value| Self::parse(&value))
    }

    /// The `/` prefix.
    #[must_use]
    pub fn root() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }

    /// Prefix as configured, with leading and trailing slashes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix without its trailing slash, as routers expect for a basename.
    /// Empty for the root prefix.
    #[must_use]
    pub fn basename(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Prefix an app-relative path.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/');
        format!("{}{relative}", self.0)
    }

    /// Remove the prefix from a browser location, yielding an app-relative path.
    ///
    /// Returns `None` when the location lies outside the prefix.
    #[must_use]
    pub fn strip<'a>(&self, location: &'a str) -> Option<&'a str> {
        let basename = self.basename();
        if basename.is_empty() {
            return Some(location);
        }
        let rest = location.strip_prefix(basename)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with(['/', '?', '#']) {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for BaseUrl {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_value() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn configured_value() -> Option<String> {
    option_env!("CLUBROOM_BASE_URL")
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_slashes() -> Result<(), ConfigError> {
        assert_eq!(BaseUrl::parse("")?.as_str(), "/");
        assert_eq!(BaseUrl::parse("/")?.as_str(), "/");
        assert_eq!(BaseUrl::parse("club")?.as_str(), "/club/");
        assert_eq!(BaseUrl::parse("/club")?.as_str(), "/club/");
        assert_eq!(BaseUrl::parse(" /club/site/ ")?.as_str(), "/club/site/");
        Ok(())
    }

    #[test]
    fn parse_rejects_unusable_values() {
        for value in ["https://example.com/", "/club?x=1", "/club#top", "/my club"] {
            assert!(
                matches!(
                    BaseUrl::parse(value),
                    Err(ConfigError::InvalidBaseUrl { value: raw, .. }) if raw == value
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn join_and_strip_are_inverse() -> Result<(), ConfigError> {
        let base = BaseUrl::parse("/club/")?;
        assert_eq!(base.join("/"), "/club/");
        assert_eq!(base.join("/notices/42"), "/club/notices/42");
        assert_eq!(base.strip("/club/notices/42"), Some("/notices/42"));
        assert_eq!(base.strip("/club"), Some("/"));
        assert_eq!(base.strip("/club?page=2"), Some("?page=2"));
        assert_eq!(base.strip("/clubhouse"), None);
        assert_eq!(base.strip("/notices"), None);

        let root = BaseUrl::root();
        assert_eq!(root.basename(), "");
        assert_eq!(root.join("/notices"), "/notices");
        assert_eq!(root.strip("/notices"), Some("/notices"));
        Ok(())
    }
}
