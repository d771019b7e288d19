//! Path pattern compilation and matching.
//!
//! Patterns are `/`-separated segments where `:name` captures one segment.
//! Static segments compare ASCII case-insensitively; captured values keep
//! their case.
//! When several patterns match, the one with a static segment at the first
//! position where they differ wins.

#![allow(clippy::redundant_pub_crate)]

use std::cmp::Ordering;

use crate::error::{RouteError, RouteResult};
use crate::model::Params;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    const fn rank(&self) -> u8 {
        match self {
            Self::Static(_) => 2,
            Self::Param(_) => 1,
        }
    }
}

/// Compiled route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub(crate) fn parse(raw: &str) -> Self {
        let segments = split_segments(raw)
            .map(|segment| {
                segment.strip_prefix(':').map_or_else(
                    || Segment::Static(segment.to_string()),
                    |name| Segment::Param(name.to_string()),
                )
            })
            .collect::<Vec<_>>();
        let raw = if segments.is_empty() {
            "/".to_string()
        } else {
            let mut joined = String::new();
            for segment in split_segments(raw) {
                joined.push('/');
                joined.push_str(segment);
            }
            joined
        };
        Self { raw, segments }
    }

    /// Join a parent pattern with a relative child pattern.
    pub(crate) fn nest(&self, child: &str) -> Self {
        if child.starts_with('/') {
            return Self::parse(child);
        }
        Self::parse(&format!("{}/{child}", self.raw.trim_end_matches('/')))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    pub(crate) fn has_params(&self) -> bool {
        self.params().next().is_some()
    }

    /// Match already-split path segments, decoding captured values.
    ///
    /// Returns `Ok(None)` when the pattern does not apply.
    pub(crate) fn capture(&self, path: &[&str]) -> RouteResult<Option<Params>> {
        if path.len() != self.segments.len() {
            return Ok(None);
        }
        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(value) {
                        return Ok(None);
                    }
                }
                Segment::Param(name) => {
                    let decoded = urlencoding::decode(value).map_err(|_| {
                        RouteError::InvalidEncoding {
                            segment: (*value).to_string(),
                        }
                    })?;
                    params.insert(name.as_str(), decoded.into_owned());
                }
            }
        }
        Ok(Some(params))
    }

    /// Compare specificity; `Greater` means `self` should win.
    pub(crate) fn precedence(&self, other: &Self) -> Ordering {
        self.segments
            .iter()
            .map(Segment::rank)
            .cmp(other.segments.iter().map(Segment::rank))
    }

    /// Substitute parameters into the pattern, percent-encoding values.
    ///
    /// Returns the name of the first parameter that is absent.
    pub(crate) fn build(&self, params: &Params) -> Result<String, String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| name.clone())?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

/// Split an app-relative path into segments, ignoring query, fragment, and
/// empty segments.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    split_segments(&path[..end]).collect()
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_raw_patterns() {
        assert_eq!(Pattern::parse("/").as_str(), "/");
        assert_eq!(Pattern::parse("/notices/:no/").as_str(), "/notices/:no");
        assert_eq!(
            Pattern::parse("/admin").nest("members").as_str(),
            "/admin/members"
        );
        assert_eq!(Pattern::parse("/").nest("me").as_str(), "/me");
    }

    #[test]
    fn capture_decodes_parameters() -> RouteResult<()> {
        let pattern = Pattern::parse("/classes/:name/:conducted");
        let params = pattern
            .capture(&split_path("/classes/%EB%8C%80%EC%88%98/2024-01"))?
            .ok_or_else(|| RouteError::NotFound {
                path: "expected match".to_string(),
            })?;
        assert_eq!(params.get("name"), Some("대수"));
        assert_eq!(params.get("conducted"), Some("2024-01"));
        assert_eq!(pattern.capture(&split_path("/classes/x"))?, None);
        let upper = pattern
            .capture(&split_path("/Classes/Algebra/2024-01"))?
            .ok_or_else(|| RouteError::NotFound {
                path: "expected case-insensitive match".to_string(),
            })?;
        assert_eq!(upper.get("name"), Some("Algebra"));
        assert_eq!(pattern.capture(&split_path("/notices/x/y"))?, None);
        Ok(())
    }

    #[test]
    fn capture_rejects_invalid_utf8() {
        let pattern = Pattern::parse("/classes/:name");
        assert!(matches!(
            pattern.capture(&["classes", "%FF"]),
            Err(RouteError::InvalidEncoding { segment }) if segment == "%FF"
        ));
    }

    #[test]
    fn static_segments_outrank_parameters() {
        let write = Pattern::parse("/notices/write");
        let entry = Pattern::parse("/notices/:no");
        assert_eq!(write.precedence(&entry), Ordering::Greater);
        let record = Pattern::parse("/classes/:name/:conducted");
        let editor = Pattern::parse("/classes/:name/write");
        assert_eq!(record.precedence(&editor), Ordering::Less);
    }

    #[test]
    fn split_path_ignores_query_and_fragment() {
        assert_eq!(split_path("/notices/?page=2#top"), vec!["notices"]);
        assert!(split_path("/").is_empty());
        assert_eq!(split_path("//admin//members/"), vec!["admin", "members"]);
    }

    #[test]
    fn build_encodes_and_reports_missing_params() {
        let pattern = Pattern::parse("/classes/:name/:conducted");
        let params = Params::new()
            .with("name", "대수")
            .with("conducted", "2024-01");
        assert_eq!(
            pattern.build(&params),
            Ok("/classes/%EB%8C%80%EC%88%98/2024-01".to_string())
        );
        assert_eq!(
            pattern.build(&Params::new().with("name", "x")),
            Err("conducted".to_string())
        );
        assert_eq!(Pattern::parse("/").build(&Params::new()), Ok("/".to_string()));
    }
}
