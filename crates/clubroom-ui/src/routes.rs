//! Browser routes mirrored from the club route table.
//!
//! The router only decides which location is active; resolution, props, and
//! breadcrumbs always come from [`clubroom_routes::RouteTable`].

use clubroom_routes::{BaseUrl, Params, RouteName};
use yew_router::prelude::*;

/// Locations the browser router recognises.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Club introduction.
    #[at("/about")]
    About,
    /// Club rules.
    #[at("/rules")]
    Rules,
    /// Notice list.
    #[at("/notices")]
    Notices,
    /// Notice editor.
    #[at("/notices/write")]
    WriteNotice,
    /// A single notice.
    #[at("/notices/:no")]
    Notice {
        /// Notice number as it appears in the path.
        no: String,
    },
    /// Introduction editor.
    #[at("/about/write")]
    WriteAbout,
    /// Rules editor.
    #[at("/rules/write")]
    WriteRules,
    /// Current member profile.
    #[at("/me")]
    Me,
    /// Magazine grid.
    #[at("/magazines")]
    Magazines,
    /// Magazine editor.
    #[at("/magazines/write")]
    MagazineWrite,
    /// A class.
    #[at("/classes/:name")]
    Class {
        /// Class name.
        name: String,
    },
    /// Class record editor.
    #[at("/classes/:name/write")]
    WriteClassRecord {
        /// Class name.
        name: String,
    },
    /// A conducted class session.
    #[at("/classes/:name/:conducted")]
    ClassRecord {
        /// Class name.
        name: String,
        /// Session identifier.
        conducted: String,
    },
    /// Admin panel.
    #[at("/admin")]
    Admin,
    /// Admin club information form.
    #[at("/admin/club-information")]
    AdminClubInformation,
    /// Admin class information form.
    #[at("/admin/classes")]
    AdminClasses,
    /// Admin member list.
    #[at("/admin/members")]
    AdminMembers,
    /// Fallback for anything else.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Browser route for a named table route.
    ///
    /// Returns `None` when a parameter the route needs is absent.
    #[must_use]
    pub fn named(name: RouteName, params: &Params) -> Option<Self> {
        let param = |key: &str| params.get(key).map(str::to_string);
        Some(match name {
            RouteName::Home => Self::Home,
            RouteName::About => Self::About,
            RouteName::Rules => Self::Rules,
            RouteName::Notices => Self::Notices,
            RouteName::Notice => Self::Notice { no: param("no")? },
            RouteName::WriteNotice => Self::WriteNotice,
            RouteName::WriteAbout => Self::WriteAbout,
            RouteName::WriteRules => Self::WriteRules,
            RouteName::Me => Self::Me,
            RouteName::Magazines => Self::Magazines,
            RouteName::MagazineWrite => Self::MagazineWrite,
            RouteName::Class => Self::Class {
                name: param("name")?,
            },
            RouteName::ClassRecord => Self::ClassRecord {
                name: param("name")?,
                conducted: param("conducted")?,
            },
            RouteName::WriteClassRecord => Self::WriteClassRecord {
                name: param("name")?,
            },
            RouteName::Admin => Self::Admin,
        })
    }

    /// Recognise a base-prefixed link, such as a breadcrumb `href`.
    #[must_use]
    pub fn from_href(base: &BaseUrl, href: &str) -> Option<Self> {
        base.strip(href).and_then(Self::recognize)
    }
}

/// App-relative path to resolve for a browser location.
///
/// Locations outside `base` are passed through unchanged so the table can
/// report them as missing.
#[must_use]
pub fn requested_path<'a>(base: &BaseUrl, location: &'a str) -> &'a str {
    base.strip(location).unwrap_or(location)
}
