//! Route descriptor data types shared by the table, the matcher, and the front-end.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// Names of every routable page on the club site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteName {
    /// Landing page.
    Home,
    /// Club introduction post.
    About,
    /// Club rules post.
    Rules,
    /// Notice list.
    Notices,
    /// A single notice.
    Notice,
    /// Notice editor.
    WriteNotice,
    /// Introduction editor.
    WriteAbout,
    /// Rules editor.
    WriteRules,
    /// Current member profile.
    Me,
    /// Magazine grid.
    Magazines,
    /// Magazine editor.
    MagazineWrite,
    /// A class and its records.
    Class,
    /// A single conducted class record.
    ClassRecord,
    /// Class record editor.
    WriteClassRecord,
    /// Admin panel.
    Admin,
}

impl RouteName {
    /// Every route name in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Home,
        Self::About,
        Self::Rules,
        Self::Notices,
        Self::Notice,
        Self::WriteNotice,
        Self::WriteAbout,
        Self::WriteRules,
        Self::Me,
        Self::Magazines,
        Self::MagazineWrite,
        Self::Class,
        Self::ClassRecord,
        Self::WriteClassRecord,
        Self::Admin,
    ];

    /// Stable identifier used in links and serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Rules => "rules",
            Self::Notices => "notices",
            Self::Notice => "notice",
            Self::WriteNotice => "writeNotice",
            Self::WriteAbout => "writeAbout",
            Self::WriteRules => "writeRules",
            Self::Me => "me",
            Self::Magazines => "magazines",
            Self::MagazineWrite => "magazineWrite",
            Self::Class => "class",
            Self::ClassRecord => "classRecord",
            Self::WriteClassRecord => "writeClassRecord",
            Self::Admin => "admin",
        }
    }
}

impl Display for RouteName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| RouteError::UnknownRoute {
                name: value.to_string(),
            })
    }
}

/// View components the table can hand to a loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    /// Landing page.
    HomeView,
    /// A single post (about, rules, or a notice).
    PostView,
    /// Paginated post list.
    PostListView,
    /// Post editor.
    PostWriteView,
    /// Member profile.
    MeView,
    /// Magazine grid.
    MagazineGridView,
    /// Magazine editor.
    MagazineWriteView,
    /// Class overview.
    ClassView,
    /// Single class record.
    ClassRecordView,
    /// Class record editor.
    ClassRecordWriteView,
    /// Admin layout hosting the admin children.
    AdminView,
    /// Club information form.
    AdminClubInformationView,
    /// Class information form.
    AdminClassInformationView,
    /// Member list.
    AdminMemberList,
}

impl ViewKind {
    /// Component identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomeView => "HomeView",
            Self::PostView => "PostView",
            Self::PostListView => "PostListView",
            Self::PostWriteView => "PostWriteView",
            Self::MeView => "MeView",
            Self::MagazineGridView => "MagazineGridView",
            Self::MagazineWriteView => "MagazineWriteView",
            Self::ClassView => "ClassView",
            Self::ClassRecordView => "ClassRecordView",
            Self::ClassRecordWriteView => "ClassRecordWriteView",
            Self::AdminView => "AdminView",
            Self::AdminClubInformationView => "AdminClubInformationView",
            Self::AdminClassInformationView => "AdminClassInformationView",
            Self::AdminMemberList => "AdminMemberList",
        }
    }
}

impl Display for ViewKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

/// How a descriptor's view is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "load", content = "view", rename_all = "snake_case")]
pub enum ViewSource {
    /// Bundled with the entry point and available synchronously.
    Eager(ViewKind),
    /// Fetched on first navigation.
    Lazy(ViewKind),
}

impl ViewSource {
    /// View regardless of load strategy.
    #[must_use]
    pub const fn kind(self) -> ViewKind {
        match self {
            Self::Eager(kind) | Self::Lazy(kind) => kind,
        }
    }

    /// Whether the view is loaded on demand.
    #[must_use]
    pub const fn is_lazy(self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

/// Post collections served by the post views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Club introduction.
    About,
    /// Club rules.
    Rules,
    /// Notices.
    Notices,
}

/// Props handed to a view component.
///
/// Serialises to the flat mapping the view receives, e.g.
/// `{"type": "notices", "no": 42}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewProps {
    /// A post collection.
    Post {
        /// Collection the view reads from.
        #[serde(rename = "type")]
        kind: PostKind,
    },
    /// A numbered entry inside a post collection.
    Entry {
        /// Collection the entry belongs to.
        #[serde(rename = "type")]
        kind: PostKind,
        /// Entry number.
        no: u64,
    },
    /// A class.
    Class {
        /// Class name.
        name: String,
    },
    /// A conducted session of a class.
    ClassRecord {
        /// Class name.
        name: String,
        /// Session identifier, usually a date.
        conducted: String,
    },
}

/// Pure function deriving props from matched path parameters.
pub type PropsFn = fn(&Params) -> RouteResult<ViewProps>;

/// Prop source declared on a descriptor.
#[derive(Clone, Copy, Debug)]
pub enum Props {
    /// The view takes no props.
    None,
    /// Static `{type}` mapping.
    Static(PostKind),
    /// Props computed from path parameters.
    Derived(PropsFn),
}

impl Props {
    /// Compute the props for a match.
    ///
    /// # Errors
    ///
    /// Propagates parameter extraction failures from derived props.
    pub fn resolve(self, params: &Params) -> RouteResult<Option<ViewProps>> {
        match self {
            Self::None => Ok(None),
            Self::Static(kind) => Ok(Some(ViewProps::Post { kind })),
            Self::Derived(derive) => derive(params).map(Some),
        }
    }
}

/// Static breadcrumb entry declared in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label.
    pub text: &'static str,
    /// Link target; `None` marks the current page.
    pub to: Option<RouteName>,
}

impl Crumb {
    /// Clickable entry.
    #[must_use]
    pub const fn link(text: &'static str, to: RouteName) -> Self {
        Self { text, to: Some(to) }
    }

    /// Non-clickable entry for the current page.
    #[must_use]
    pub const fn here(text: &'static str) -> Self {
        Self { text, to: None }
    }
}

/// Breadcrumb metadata declared on a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trail {
    /// No breadcrumb is rendered.
    None,
    /// Fixed sequence of entries.
    Static(&'static [Crumb]),
    /// Fixed prefix followed by the title the loaded view reports.
    Titled(&'static [Crumb]),
}

impl Trail {
    /// Declared entries, excluding any dynamic title.
    #[must_use]
    pub const fn crumbs(self) -> &'static [Crumb] {
        match self {
            Self::None => &[],
            Self::Static(crumbs) | Self::Titled(crumbs) => crumbs,
        }
    }

    /// Whether any breadcrumb metadata is declared.
    #[must_use]
    pub const fn is_declared(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Static record binding a URL pattern to a view and metadata.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    /// Pattern with `:param` segments; relative for children.
    pub path: &'static str,
    /// Unique route name; children may be anonymous.
    pub name: Option<RouteName>,
    /// View component and load strategy.
    pub view: ViewSource,
    /// Prop source.
    pub props: Props,
    /// Breadcrumb metadata.
    pub trail: Trail,
    /// Nested descriptors rendered inside this view.
    pub children: &'static [RouteDescriptor],
}

/// Path parameters captured during matching, percent-decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up a parameter that the pattern guarantees.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParam`] when the parameter is absent.
    pub fn require(&self, route: &str, name: &str) -> RouteResult<&str> {
        self.get(name).ok_or_else(|| RouteError::MissingParam {
            route: route.to_string(),
            param: name.to_string(),
        })
    }

    /// Parse a parameter as an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParam`] when absent and
    /// [`RouteError::InvalidParam`] when the value is not a non-negative integer.
    pub fn number(&self, route: &str, name: &str) -> RouteResult<u64> {
        let raw = self.require(route, name)?;
        raw.parse().map_err(|_| RouteError::InvalidParam {
            param: name.to_string(),
            value: raw.to_string(),
        })
    }

    /// Iterate parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Breadcrumb entry ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    /// Display label.
    pub text: String,
    /// Target route; `None` for the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<RouteName>,
    /// Base-prefixed link for `to`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbEntry {
    /// Plain-text entry for the current page.
    #[must_use]
    pub fn here(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to: None,
            href: None,
        }
    }
}
