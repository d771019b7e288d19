//! The club site's route table.

use crate::error::RouteResult;
use crate::model::{
    Crumb, Params, PostKind, Props, RouteDescriptor, RouteName, Trail, ViewKind, ViewProps,
    ViewSource,
};

/// Label of the root breadcrumb entry.
pub const ROOT_CRUMB: &str = "대문";

const HOME: Crumb = Crumb::link(ROOT_CRUMB, RouteName::Home);
const EDIT: Crumb = Crumb::here("편집");

/// Trail of the home route.
pub(crate) const HOME_TRAIL: &[Crumb] = &[Crumb::here(ROOT_CRUMB)];
const ABOUT_TRAIL: &[Crumb] = &[HOME, Crumb::here("소개")];
const RULES_TRAIL: &[Crumb] = &[HOME, Crumb::here("회칙")];
const NOTICES_TRAIL: &[Crumb] = &[HOME, Crumb::here("공지")];
const NOTICE_TRAIL: &[Crumb] = &[HOME, Crumb::link("공지", RouteName::Notices)];
const WRITE_NOTICE_TRAIL: &[Crumb] = &[HOME, Crumb::link("공지", RouteName::Notices), EDIT];
const WRITE_ABOUT_TRAIL: &[Crumb] = &[HOME, Crumb::link("소개", RouteName::About), EDIT];
const WRITE_RULES_TRAIL: &[Crumb] = &[HOME, Crumb::link("회칙", RouteName::Rules)];
const MAGAZINES_TRAIL: &[Crumb] = &[HOME, Crumb::here("문집")];
const MAGAZINE_WRITE_TRAIL: &[Crumb] = &[HOME, Crumb::link("문집", RouteName::Magazines)];

const ADMIN_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "club-information",
        name: None,
        view: ViewSource::Lazy(ViewKind::AdminClubInformationView),
        props: Props::None,
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "classes",
        name: None,
        view: ViewSource::Lazy(ViewKind::AdminClassInformationView),
        props: Props::None,
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "members",
        name: None,
        view: ViewSource::Lazy(ViewKind::AdminMemberList),
        props: Props::None,
        trail: Trail::None,
        children: &[],
    },
];

/// Every route served by the club site, in declaration order.
pub static CLUB_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        name: Some(RouteName::Home),
        view: ViewSource::Eager(ViewKind::HomeView),
        props: Props::None,
        trail: Trail::Static(HOME_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/about",
        name: Some(RouteName::About),
        view: ViewSource::Lazy(ViewKind::PostView),
        props: Props::Static(PostKind::About),
        trail: Trail::Static(ABOUT_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/rules",
        name: Some(RouteName::Rules),
        view: ViewSource::Lazy(ViewKind::PostView),
        props: Props::Static(PostKind::Rules),
        trail: Trail::Static(RULES_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/notices",
        name: Some(RouteName::Notices),
        view: ViewSource::Lazy(ViewKind::PostListView),
        props: Props::Static(PostKind::Notices),
        trail: Trail::Static(NOTICES_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/notices/:no",
        name: Some(RouteName::Notice),
        view: ViewSource::Lazy(ViewKind::PostView),
        props: Props::Derived(notice_props),
        trail: Trail::Titled(NOTICE_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/notices/write",
        name: Some(RouteName::WriteNotice),
        view: ViewSource::Lazy(ViewKind::PostWriteView),
        props: Props::Static(PostKind::Notices),
        trail: Trail::Static(WRITE_NOTICE_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/about/write",
        name: Some(RouteName::WriteAbout),
        view: ViewSource::Lazy(ViewKind::PostWriteView),
        props: Props::Static(PostKind::About),
        trail: Trail::Static(WRITE_ABOUT_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/rules/write",
        name: Some(RouteName::WriteRules),
        view: ViewSource::Lazy(ViewKind::PostWriteView),
        props: Props::Static(PostKind::Rules),
        trail: Trail::Static(WRITE_RULES_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/me",
        name: Some(RouteName::Me),
        view: ViewSource::Lazy(ViewKind::MeView),
        props: Props::None,
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "/magazines",
        name: Some(RouteName::Magazines),
        view: ViewSource::Lazy(ViewKind::MagazineGridView),
        props: Props::None,
        trail: Trail::Static(MAGAZINES_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/magazines/write",
        name: Some(RouteName::MagazineWrite),
        view: ViewSource::Lazy(ViewKind::MagazineWriteView),
        props: Props::None,
        trail: Trail::Static(MAGAZINE_WRITE_TRAIL),
        children: &[],
    },
    RouteDescriptor {
        path: "/classes/:name",
        name: Some(RouteName::Class),
        view: ViewSource::Lazy(ViewKind::ClassView),
        props: Props::Derived(class_props),
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "/classes/:name/:conducted",
        name: Some(RouteName::ClassRecord),
        view: ViewSource::Lazy(ViewKind::ClassRecordView),
        props: Props::Derived(class_record_props),
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "/classes/:name/write",
        name: Some(RouteName::WriteClassRecord),
        view: ViewSource::Lazy(ViewKind::ClassRecordWriteView),
        props: Props::Derived(class_props),
        trail: Trail::None,
        children: &[],
    },
    RouteDescriptor {
        path: "/admin",
        name: Some(RouteName::Admin),
        view: ViewSource::Lazy(ViewKind::AdminView),
        props: Props::None,
        trail: Trail::None,
        children: ADMIN_CHILDREN,
    },
];

fn notice_props(params: &Params) -> RouteResult<ViewProps> {
    Ok(ViewProps::Entry {
        kind: PostKind::Notices,
        no: params.number("notice", "no")?,
    })
}

fn class_props(params: &Params) -> RouteResult<ViewProps> {
    Ok(ViewProps::Class {
        name: params.require("class", "name")?.to_string(),
    })
}

fn class_record_props(params: &Params) -> RouteResult<ViewProps> {
    Ok(ViewProps::ClassRecord {
        name: params.require("classRecord", "name")?.to_string(),
        conducted: params.require("classRecord", "conducted")?.to_string(),
    })
}
