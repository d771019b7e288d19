//! Error types for route resolution, table construction, and view loading.

use thiserror::Error;

use crate::model::ViewKind;

/// Primary error type for route table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No descriptor matched the requested path.
    #[error("no route matches path")]
    NotFound {
        /// Path that failed to match.
        path: String,
    },
    /// A route name was not present in the table.
    #[error("unknown route name")]
    UnknownRoute {
        /// Requested route name.
        name: String,
    },
    /// A required path parameter was not supplied.
    #[error("missing route parameter")]
    MissingParam {
        /// Route name or pattern that required the parameter.
        route: String,
        /// Missing parameter name.
        param: String,
    },
    /// A path parameter could not be coerced to the type the view expects.
    #[error("invalid route parameter")]
    InvalidParam {
        /// Parameter name.
        param: String,
        /// Raw value supplied in the path.
        value: String,
    },
    /// A path segment was not valid percent-encoded UTF-8.
    #[error("path segment is not valid percent-encoded utf-8")]
    InvalidEncoding {
        /// Offending raw segment.
        segment: String,
    },
    /// Two descriptors share the same name.
    #[error("duplicate route name")]
    DuplicateName {
        /// Name declared more than once.
        name: String,
    },
    /// A parameterised pattern has no props function to extract its parameters.
    #[error("parameterised route has no props function")]
    MissingProps {
        /// Full pattern of the offending descriptor.
        path: String,
    },
    /// A breadcrumb trail is empty or does not start at the root entry.
    #[error("breadcrumb trail does not start at the root entry")]
    MalformedTrail {
        /// Full pattern of the offending descriptor.
        path: String,
    },
    /// A breadcrumb links to a route that cannot be reached without parameters.
    #[error("breadcrumb links to a parameterised route")]
    ParameterizedCrumbTarget {
        /// Full pattern of the descriptor owning the breadcrumb.
        path: String,
        /// Target route name.
        target: String,
    },
}

/// Convenience alias for route table results.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors raised while reading runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured base URL cannot be used as a path prefix.
    #[error("invalid base url")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Short reason the value was rejected.
        reason: &'static str,
    },
}

/// Errors reported by a [`crate::loader::ViewLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewLoadError {
    /// The loader has no component registered for the view.
    #[error("view is not available")]
    Unavailable {
        /// Requested view.
        view: ViewKind,
    },
    /// Loading the view failed.
    #[error("view failed to load")]
    Failed {
        /// Requested view.
        view: ViewKind,
        /// Loader supplied failure detail.
        message: String,
    },
}

/// Failure of a single navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The path did not resolve to a route.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// A view on the matched chain failed to load.
    #[error(transparent)]
    Load(#[from] ViewLoadError),
}
