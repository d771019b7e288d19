#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Route table for the club site's single-page client.
//!
//! Layout: `model.rs` (descriptor and resolved types), `club.rs` (the declared
//! table), `matcher.rs` (pattern matching and precedence), `table.rs`
//! (`RouteTable` compilation, validation, and resolution), `loader.rs`
//! (`ViewLoader` capability and `Navigator`), `config.rs` (base URL).

pub mod club;
pub mod config;
pub mod error;
pub mod loader;
mod matcher;
pub mod model;
pub mod table;

pub use club::{CLUB_ROUTES, ROOT_CRUMB};
pub use config::{BASE_URL_ENV, BaseUrl};
pub use error::{ConfigError, NavigationError, RouteError, RouteResult, ViewLoadError};
pub use loader::{Navigation, Navigator, ViewLoader};
pub use model::{
    BreadcrumbEntry, Crumb, Params, PostKind, Props, RouteDescriptor, RouteName, Trail, ViewKind,
    ViewProps, ViewSource,
};
pub use table::{BreadcrumbTrail, ResolvedRoute, RouteSummary, RouteTable};
