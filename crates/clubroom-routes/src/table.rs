//! Compiled route table and resolution.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::club::{CLUB_ROUTES, HOME_TRAIL, ROOT_CRUMB};
use crate::config::BaseUrl;
use crate::error::{RouteError, RouteResult};
use crate::matcher::{Pattern, split_path};
use crate::model::{
    BreadcrumbEntry, Crumb, Params, Props, RouteDescriptor, RouteName, Trail, ViewKind, ViewProps,
    ViewSource,
};

#[derive(Debug)]
struct CompiledRoute {
    pattern: Pattern,
    /// Descriptors from the outermost parent to the matched leaf.
    chain: Vec<&'static RouteDescriptor>,
}

impl CompiledRoute {
    fn leaf(&self) -> &'static RouteDescriptor {
        // Chains are built by pushing onto a parent chain, so never empty.
        self.chain[self.chain.len() - 1]
    }

    /// Nearest declared trail, walking from the leaf outwards.
    fn trail(&self) -> Trail {
        self.chain
            .iter()
            .rev()
            .map(|descriptor| descriptor.trail)
            .find(|trail| trail.is_declared())
            .unwrap_or(Trail::None)
    }
}

/// Immutable, validated route table bound to a base URL.
#[derive(Debug)]
pub struct RouteTable {
    base: BaseUrl,
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Build the club site table.
    ///
    /// # Errors
    ///
    /// Returns an error when the declared table violates an invariant.
    pub fn club(base: BaseUrl) -> RouteResult<Self> {
        Self::new(CLUB_ROUTES, base)
    }

    /// Compile and validate a descriptor tree.
    ///
    /// # Errors
    ///
    /// Rejects duplicate names, parameterised patterns without derived props,
    /// trails that do not start at the root entry, and breadcrumb links to
    /// unknown or parameterised routes.
    pub fn new(descriptors: &'static [RouteDescriptor], base: BaseUrl) -> RouteResult<Self> {
        let mut routes = Vec::new();
        let root = Pattern::parse("/");
        flatten(descriptors, &root, &[], &mut routes);

        let table = Self { base, routes };
        table.validate()?;
        info!(
            routes = table.routes.len(),
            base = %table.base,
            "route table compiled"
        );
        Ok(table)
    }

    fn validate(&self) -> RouteResult<()> {
        let mut names = HashSet::new();
        for route in &self.routes {
            let leaf = route.leaf();
            if let Some(name) = leaf.name
                && !names.insert(name)
            {
                return Err(RouteError::DuplicateName {
                    name: name.to_string(),
                });
            }
            if route.pattern.has_params() && !matches!(leaf.props, Props::Derived(_)) {
                return Err(RouteError::MissingProps {
                    path: route.pattern.as_str().to_string(),
                });
            }
            self.validate_trail(route.pattern.as_str(), leaf)?;
        }
        Ok(())
    }

    fn validate_trail(&self, path: &str, descriptor: &RouteDescriptor) -> RouteResult<()> {
        if !descriptor.trail.is_declared() {
            return Ok(());
        }
        let crumbs = descriptor.trail.crumbs();
        let well_formed = if descriptor.name == Some(RouteName::Home) {
            descriptor.trail == Trail::Static(HOME_TRAIL)
        } else {
            crumbs
                .first()
                .is_some_and(|first| first.text == ROOT_CRUMB && first.to == Some(RouteName::Home))
        };
        if !well_formed {
            return Err(RouteError::MalformedTrail {
                path: path.to_string(),
            });
        }
        for target in crumbs.iter().filter_map(|crumb| crumb.to) {
            let compiled = self.named(target)?;
            if compiled.pattern.has_params() {
                return Err(RouteError::ParameterizedCrumbTarget {
                    path: path.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Base URL applied to generated links.
    #[must_use]
    pub const fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Resolve an app-relative path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when no pattern matches, and propagates
    /// decoding and prop extraction failures.
    pub fn resolve(&self, path: &str) -> RouteResult<ResolvedRoute> {
        let segments = split_path(path);
        let mut best: Option<(&CompiledRoute, Params)> = None;
        for route in &self.routes {
            let Some(params) = route.pattern.capture(&segments)? else {
                continue;
            };
            let wins = best.as_ref().is_none_or(|(current, _)| {
                route.pattern.precedence(&current.pattern) == Ordering::Greater
            });
            if wins {
                best = Some((route, params));
            }
        }

        let Some((route, params)) = best else {
            debug!(path, "no route matched");
            return Err(RouteError::NotFound {
                path: path.to_string(),
            });
        };
        let resolved = self.finish(route, params)?;
        debug!(
            path,
            route = resolved.name.map_or("<anonymous>", RouteName::as_str),
            view = %resolved.view.kind(),
            "route resolved"
        );
        Ok(resolved)
    }

    /// Resolve a browser location that still carries the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when the location lies outside the base
    /// URL, otherwise behaves like [`RouteTable::resolve`].
    pub fn resolve_location(&self, location: &str) -> RouteResult<ResolvedRoute> {
        let path = self
            .base
            .strip(location)
            .ok_or_else(|| RouteError::NotFound {
                path: location.to_string(),
            })?;
        self.resolve(path)
    }

    /// Resolve a named route with explicit parameters.
    ///
    /// The named descriptor is returned as is, even when its built path would
    /// match a more specific pattern (`conducted = "write"`).
    ///
    /// # Errors
    ///
    /// Returns an error when the name is unknown, a parameter is missing, or
    /// prop extraction fails.
    pub fn resolve_named(&self, name: RouteName, params: &Params) -> RouteResult<ResolvedRoute> {
        let route = self.named(name)?;
        let captured = route
            .pattern
            .params()
            .map(|param| {
                params
                    .get(param)
                    .map(|value| (param, value))
                    .ok_or_else(|| RouteError::MissingParam {
                        route: name.to_string(),
                        param: param.to_string(),
                    })
            })
            .try_fold(Params::new(), |captured, entry| {
                entry.map(|(param, value)| captured.with(param, value))
            })?;
        self.finish(route, captured)
    }

    /// Base-prefixed link to a named route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] or [`RouteError::MissingParam`].
    pub fn href(&self, name: RouteName, params: &Params) -> RouteResult<String> {
        let path = self.path_for(name, params)?;
        Ok(self.base.join(&path))
    }

    fn path_for(&self, name: RouteName, params: &Params) -> RouteResult<String> {
        self.named(name)?
            .pattern
            .build(params)
            .map_err(|param| RouteError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    fn named(&self, name: RouteName) -> RouteResult<&CompiledRoute> {
        self.routes
            .iter()
            .find(|route| route.leaf().name == Some(name))
            .ok_or_else(|| RouteError::UnknownRoute {
                name: name.to_string(),
            })
    }

    /// Descriptor registered under a name.
    #[must_use]
    pub fn descriptor(&self, name: RouteName) -> Option<&'static RouteDescriptor> {
        self.named(name).ok().map(CompiledRoute::leaf)
    }

    /// Full pattern of a named route.
    #[must_use]
    pub fn pattern(&self, name: RouteName) -> Option<&str> {
        self.named(name).ok().map(|route| route.pattern.as_str())
    }

    /// Flattened listing of every route, children included.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteSummary> {
        self.routes
            .iter()
            .map(|route| {
                let leaf = route.leaf();
                RouteSummary {
                    name: leaf.name,
                    path: route.pattern.as_str().to_string(),
                    view: leaf.view,
                    layout: parents(route),
                    params: route.pattern.params().map(str::to_string).collect(),
                    breadcrumb: route.trail().is_declared(),
                }
            })
            .collect()
    }

    fn finish(&self, route: &CompiledRoute, params: Params) -> RouteResult<ResolvedRoute> {
        let leaf = route.leaf();
        let props = leaf.props.resolve(&params)?;
        let breadcrumb = match route.trail() {
            Trail::None => None,
            Trail::Static(crumbs) => Some(BreadcrumbTrail {
                entries: self.entries(crumbs)?,
                titled: false,
            }),
            Trail::Titled(crumbs) => Some(BreadcrumbTrail {
                entries: self.entries(crumbs)?,
                titled: true,
            }),
        };
        Ok(ResolvedRoute {
            name: leaf.name,
            path: route.pattern.build(&params).unwrap_or_default(),
            pattern: route.pattern.as_str().to_string(),
            params,
            view: leaf.view,
            layout: parents(route),
            props,
            breadcrumb,
            matched: route.chain.clone(),
        })
    }

    fn entries(&self, crumbs: &[Crumb]) -> RouteResult<Vec<BreadcrumbEntry>> {
        crumbs
            .iter()
            .map(|crumb| {
                let href = crumb
                    .to
                    .map(|target| self.href(target, &Params::new()))
                    .transpose()?;
                Ok(BreadcrumbEntry {
                    text: crumb.text.to_string(),
                    to: crumb.to,
                    href,
                })
            })
            .collect()
    }
}

fn flatten(
    descriptors: &'static [RouteDescriptor],
    parent: &Pattern,
    chain: &[&'static RouteDescriptor],
    out: &mut Vec<CompiledRoute>,
) {
    for descriptor in descriptors {
        let pattern = parent.nest(descriptor.path);
        let mut nested = chain.to_vec();
        nested.push(descriptor);
        out.push(CompiledRoute {
            pattern: pattern.clone(),
            chain: nested.clone(),
        });
        flatten(descriptor.children, &pattern, &nested, out);
    }
}

fn parents(route: &CompiledRoute) -> Vec<ViewKind> {
    route.chain[..route.chain.len() - 1]
        .iter()
        .map(|descriptor| descriptor.view.kind())
        .collect()
}

/// Breadcrumb entries resolved for a matched route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbTrail {
    /// Declared entries with links resolved.
    pub entries: Vec<BreadcrumbEntry>,
    /// Whether the loaded view's title is appended as the final entry.
    pub titled: bool,
}

/// Outcome of matching a path against the table.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedRoute {
    /// Matched route name; `None` for anonymous children.
    pub name: Option<RouteName>,
    /// Canonical app-relative path.
    pub path: String,
    /// Full pattern that matched.
    pub pattern: String,
    /// Decoded path parameters.
    pub params: Params,
    /// Leaf view and load strategy.
    pub view: ViewSource,
    /// Enclosing layout views, outermost first.
    pub layout: Vec<ViewKind>,
    /// Props for the leaf view.
    pub props: Option<ViewProps>,
    /// Breadcrumb metadata, when any descriptor on the chain declares it.
    pub breadcrumb: Option<BreadcrumbTrail>,
    /// Matched descriptors, outermost first.
    #[serde(skip)]
    pub matched: Vec<&'static RouteDescriptor>,
}

impl ResolvedRoute {
    /// Breadcrumb entries to render.
    ///
    /// Titled trails append `title` as a non-clickable entry once the view has
    /// reported one. Routes without breadcrumb metadata yield nothing.
    #[must_use]
    pub fn breadcrumbs(&self, title: Option<&str>) -> Vec<BreadcrumbEntry> {
        let Some(trail) = &self.breadcrumb else {
            return Vec::new();
        };
        let mut entries = trail.entries.clone();
        if let (true, Some(title)) = (trail.titled, title) {
            entries.push(BreadcrumbEntry::here(title));
        }
        entries
    }
}

/// Listing row describing one compiled route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    /// Route name; `None` for anonymous children.
    pub name: Option<RouteName>,
    /// Full pattern.
    pub path: String,
    /// Leaf view and load strategy.
    pub view: ViewSource,
    /// Enclosing layout views.
    pub layout: Vec<ViewKind>,
    /// Parameter names in pattern order.
    pub params: Vec<String>,
    /// Whether a breadcrumb is rendered.
    pub breadcrumb: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostKind;

    fn table() -> RouteResult<RouteTable> {
        RouteTable::club(BaseUrl::root())
    }

    #[test]
    fn every_name_is_registered_once() -> RouteResult<()> {
        let table = table()?;
        let listed: Vec<_> = table.routes().into_iter().filter_map(|r| r.name).collect();
        assert_eq!(listed.len(), RouteName::ALL.len());
        for name in RouteName::ALL {
            assert_eq!(listed.iter().filter(|n| **n == name).count(), 1, "{name}");
        }
        Ok(())
    }

    #[test]
    fn children_inherit_parent_pattern() -> RouteResult<()> {
        let table = table()?;
        let admin_paths: Vec<_> = table
            .routes()
            .into_iter()
            .filter(|summary| summary.layout == vec![ViewKind::AdminView])
            .map(|summary| summary.path)
            .collect();
        assert_eq!(
            admin_paths,
            vec![
                "/admin/club-information",
                "/admin/classes",
                "/admin/members"
            ]
        );
        Ok(())
    }

    #[test]
    fn titled_trail_without_title_renders_prefix() -> RouteResult<()> {
        let resolved = table()?.resolve("/notices/7")?;
        let texts: Vec<_> = resolved
            .breadcrumbs(None)
            .into_iter()
            .map(|entry| entry.text)
            .collect();
        assert_eq!(texts, vec!["대문", "공지"]);
        Ok(())
    }

    #[test]
    fn canonical_path_is_rebuilt_from_params() -> RouteResult<()> {
        let resolved = table()?.resolve("//notices//42/?from=list")?;
        assert_eq!(resolved.path, "/notices/42");
        assert_eq!(resolved.pattern, "/notices/:no");
        Ok(())
    }

    static DUPLICATE: &[RouteDescriptor] = &[
        RouteDescriptor {
            path: "/",
            name: Some(RouteName::Home),
            view: ViewSource::Eager(ViewKind::HomeView),
            props: Props::None,
            trail: Trail::None,
            children: &[],
        },
        RouteDescriptor {
            path: "/again",
            name: Some(RouteName::Home),
            view: ViewSource::Lazy(ViewKind::HomeView),
            props: Props::None,
            trail: Trail::None,
            children: &[],
        },
    ];

    static UNPROPPED: &[RouteDescriptor] = &[RouteDescriptor {
        path: "/notices/:no",
        name: Some(RouteName::Notice),
        view: ViewSource::Lazy(ViewKind::PostView),
        props: Props::Static(PostKind::Notices),
        trail: Trail::None,
        children: &[],
    }];

    const ROOTLESS: &[Crumb] = &[Crumb::here("공지")];

    static MISSING_ROOT: &[RouteDescriptor] = &[RouteDescriptor {
        path: "/notices",
        name: Some(RouteName::Notices),
        view: ViewSource::Lazy(ViewKind::PostListView),
        props: Props::None,
        trail: Trail::Static(ROOTLESS),
        children: &[],
    }];

    const HOME_AND_MORE: &[Crumb] = &[Crumb::here(ROOT_CRUMB), Crumb::here("소개")];

    static LONG_HOME_TRAIL: &[RouteDescriptor] = &[RouteDescriptor {
        path: "/",
        name: Some(RouteName::Home),
        view: ViewSource::Eager(ViewKind::HomeView),
        props: Props::None,
        trail: Trail::Static(HOME_AND_MORE),
        children: &[],
    }];

    const HOME_ONLY: &[Crumb] = &[Crumb::here(ROOT_CRUMB)];

    static TITLED_HOME: &[RouteDescriptor] = &[RouteDescriptor {
        path: "/",
        name: Some(RouteName::Home),
        view: ViewSource::Eager(ViewKind::HomeView),
        props: Props::None,
        trail: Trail::Titled(HOME_ONLY),
        children: &[],
    }];

    const TO_ENTRY: &[Crumb] = &[
        Crumb::link(ROOT_CRUMB, RouteName::Home),
        Crumb::link("공지", RouteName::Notice),
    ];

    fn entry_props(params: &Params) -> RouteResult<ViewProps> {
        Ok(ViewProps::Entry {
            kind: PostKind::Notices,
            no: params.number("notice", "no")?,
        })
    }

    static PARAMETERISED_TARGET: &[RouteDescriptor] = &[
        RouteDescriptor {
            path: "/",
            name: Some(RouteName::Home),
            view: ViewSource::Eager(ViewKind::HomeView),
            props: Props::None,
            trail: Trail::None,
            children: &[],
        },
        RouteDescriptor {
            path: "/notices/:no",
            name: Some(RouteName::Notice),
            view: ViewSource::Lazy(ViewKind::PostView),
            props: Props::Derived(entry_props),
            trail: Trail::None,
            children: &[],
        },
        RouteDescriptor {
            path: "/notices/write",
            name: Some(RouteName::WriteNotice),
            view: ViewSource::Lazy(ViewKind::PostWriteView),
            props: Props::None,
            trail: Trail::Static(TO_ENTRY),
            children: &[],
        },
    ];

    #[test]
    fn invalid_tables_are_rejected() {
        assert!(matches!(
            RouteTable::new(DUPLICATE, BaseUrl::root()),
            Err(RouteError::DuplicateName { name }) if name == "home"
        ));
        assert!(matches!(
            RouteTable::new(UNPROPPED, BaseUrl::root()),
            Err(RouteError::MissingProps { path }) if path == "/notices/:no"
        ));
        assert!(matches!(
            RouteTable::new(MISSING_ROOT, BaseUrl::root()),
            Err(RouteError::MalformedTrail { path }) if path == "/notices"
        ));
        assert!(matches!(
            RouteTable::new(LONG_HOME_TRAIL, BaseUrl::root()),
            Err(RouteError::MalformedTrail { path }) if path == "/"
        ));
        assert!(matches!(
            RouteTable::new(TITLED_HOME, BaseUrl::root()),
            Err(RouteError::MalformedTrail { path }) if path == "/"
        ));
        assert!(matches!(
            RouteTable::new(PARAMETERISED_TARGET, BaseUrl::root()),
            Err(RouteError::ParameterizedCrumbTarget { path, target })
                if path == "/notices/write" && target == "notice"
        ));
    }
}
