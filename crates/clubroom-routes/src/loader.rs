//! View loading capability and the navigator that drives it.
//!
//! # Design
//! - Resolution stays synchronous; only lazy views are awaited.
//! - Each navigation takes a sequence number so a host can drop a load that a
//!   newer navigation has superseded.
//! - Failures are surfaced once, with no retry.

use std::cell::Cell;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{NavigationError, ViewLoadError};
use crate::model::{ViewKind, ViewSource};
use crate::table::{ResolvedRoute, RouteTable};

/// Source of view components.
#[async_trait(?Send)]
pub trait ViewLoader {
    /// Loaded component handle.
    type View;

    /// Return a view bundled with the entry point.
    ///
    /// # Errors
    ///
    /// Returns [`ViewLoadError`] when the view is not bundled.
    fn eager(&self, kind: ViewKind) -> Result<Self::View, ViewLoadError>;

    /// Fetch a view on demand.
    ///
    /// # Errors
    ///
    /// Returns [`ViewLoadError`] when the view cannot be loaded.
    async fn load(&self, kind: ViewKind) -> Result<Self::View, ViewLoadError>;
}

/// A completed navigation.
#[derive(Debug)]
pub struct Navigation<V> {
    /// Sequence number assigned when the navigation started.
    pub seq: u64,
    /// Resolved route.
    pub route: ResolvedRoute,
    /// Loaded views, outermost layout first and the leaf view last.
    pub views: Vec<V>,
}

/// Resolves paths against a [`RouteTable`] and loads the matched views.
#[derive(Debug)]
pub struct Navigator<L> {
    table: RouteTable,
    loader: L,
    sequence: Cell<u64>,
}

impl<L: ViewLoader> Navigator<L> {
    /// Pair a table with a loader.
    #[must_use]
    pub const fn new(table: RouteTable, loader: L) -> Self {
        Self {
            table,
            loader,
            sequence: Cell::new(0),
        }
    }

    /// Route table in use.
    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Loader in use.
    #[must_use]
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    /// Whether `seq` belongs to the most recent navigation.
    #[must_use]
    pub const fn is_current(&self, seq: u64) -> bool {
        self.sequence.get() == seq
    }

    /// Sequence number the next call to [`Navigator::navigate`] will take.
    ///
    /// Lets a host tag a request before awaiting it, so failures can be
    /// discarded once superseded just like successes.
    #[must_use]
    pub const fn next_seq(&self) -> u64 {
        self.sequence.get().wrapping_add(1)
    }

    /// Resolve `path` and load every view on the matched chain.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Route`] when resolution fails and
    /// [`NavigationError::Load`] when a view fails to load.
    pub async fn navigate(&self, path: &str) -> Result<Navigation<L::View>, NavigationError> {
        let seq = self.next_seq();
        self.sequence.set(seq);

        let route = self.table.resolve(path)?;
        let mut views = Vec::with_capacity(route.matched.len());
        for descriptor in &route.matched {
            let view = match descriptor.view {
                ViewSource::Eager(kind) => self.loader.eager(kind),
                ViewSource::Lazy(kind) => {
                    debug!(seq, view = %kind, "loading view");
                    self.loader.load(kind).await
                }
            }
            .inspect_err(|err| warn!(seq, path, error = %err, "view load failed"))?;
            views.push(view);
        }
        Ok(Navigation { seq, route, views })
    }
}
