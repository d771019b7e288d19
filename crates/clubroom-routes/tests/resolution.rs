use std::error::Error;

use clubroom_routes::{
    BaseUrl, BreadcrumbEntry, Params, PostKind, RouteError, RouteName, RouteTable, ViewKind,
    ViewProps, ViewSource,
};
use serde_json::json;

type TestResult = Result<(), Box<dyn Error>>;

fn table() -> Result<RouteTable, RouteError> {
    RouteTable::club(BaseUrl::root())
}

fn link(text: &str, to: RouteName, href: &str) -> BreadcrumbEntry {
    BreadcrumbEntry {
        text: text.to_string(),
        to: Some(to),
        href: Some(href.to_string()),
    }
}

fn sample_params(table: &RouteTable, name: RouteName) -> Params {
    let mut params = Params::new();
    let pattern = table.pattern(name).unwrap_or_default();
    for segment in pattern.split('/') {
        match segment {
            ":no" => params.insert("no", "7"),
            ":name" => params.insert("name", "algebra"),
            ":conducted" => params.insert("conducted", "2024-01"),
            _ => {}
        }
    }
    params
}

#[test]
fn every_route_resolves_by_name() -> TestResult {
    let table = table()?;
    for name in RouteName::ALL {
        let params = sample_params(&table, name);
        let resolved = table.resolve_named(name, &params)?;
        assert_eq!(resolved.name, Some(name));
        assert_eq!(Some(resolved.pattern.as_str()), table.pattern(name));
        let descriptor = table.descriptor(name).ok_or("descriptor missing")?;
        assert_eq!(descriptor.view, resolved.view);
        assert_eq!(table.href(name, &params)?, resolved.path);
    }
    Ok(())
}

#[test]
fn notice_entry_props_are_numeric() -> TestResult {
    let resolved = table()?.resolve("/notices/42")?;
    assert_eq!(resolved.name, Some(RouteName::Notice));
    assert_eq!(
        resolved.props,
        Some(ViewProps::Entry {
            kind: PostKind::Notices,
            no: 42
        })
    );
    assert_eq!(
        serde_json::to_value(&resolved.props)?,
        json!({ "type": "notices", "no": 42 })
    );
    assert_eq!(resolved.view, ViewSource::Lazy(ViewKind::PostView));
    Ok(())
}

#[test]
fn class_record_props_carry_both_params() -> TestResult {
    let resolved = table()?.resolve("/classes/algebra/2024-01")?;
    assert_eq!(resolved.name, Some(RouteName::ClassRecord));
    assert_eq!(
        serde_json::to_value(&resolved.props)?,
        json!({ "name": "algebra", "conducted": "2024-01" })
    );
    assert!(resolved.breadcrumbs(Some("ignored")).is_empty());
    Ok(())
}

#[test]
fn static_segments_win_over_parameters() -> TestResult {
    let table = table()?;
    assert_eq!(
        table.resolve("/notices/write")?.name,
        Some(RouteName::WriteNotice)
    );
    let editor = table.resolve("/classes/algebra/write")?;
    assert_eq!(editor.name, Some(RouteName::WriteClassRecord));
    assert_eq!(
        editor.props,
        Some(ViewProps::Class {
            name: "algebra".to_string()
        })
    );
    assert_eq!(
        table.resolve("/classes/algebra")?.name,
        Some(RouteName::Class)
    );
    Ok(())
}

#[test]
fn named_resolution_keeps_the_named_route() -> TestResult {
    let table = table()?;
    let params = Params::new()
        .with("name", "algebra")
        .with("conducted", "write");
    let record = table.resolve_named(RouteName::ClassRecord, &params)?;
    assert_eq!(record.name, Some(RouteName::ClassRecord));
    assert_eq!(record.view, ViewSource::Lazy(ViewKind::ClassRecordView));
    assert_eq!(record.path, "/classes/algebra/write");
    assert_eq!(
        record.props,
        Some(ViewProps::ClassRecord {
            name: "algebra".to_string(),
            conducted: "write".to_string(),
        })
    );

    assert_eq!(
        table
            .resolve_named(RouteName::Notice, &Params::new().with("no", "write"))
            .err(),
        Some(RouteError::InvalidParam {
            param: "no".to_string(),
            value: "write".to_string(),
        })
    );
    assert_eq!(
        table.resolve_named(RouteName::Class, &Params::new()).err(),
        Some(RouteError::MissingParam {
            route: "class".to_string(),
            param: "name".to_string(),
        })
    );
    Ok(())
}

#[test]
fn static_segments_match_regardless_of_case() -> TestResult {
    let table = table()?;
    assert_eq!(table.resolve("/About")?.name, Some(RouteName::About));

    let notice = table.resolve("/NOTICES/42")?;
    assert_eq!(notice.name, Some(RouteName::Notice));
    assert_eq!(notice.path, "/notices/42");

    let members = table.resolve("/Admin/Members")?;
    assert_eq!(members.view.kind(), ViewKind::AdminMemberList);
    assert_eq!(members.layout, vec![ViewKind::AdminView]);

    let class = table.resolve("/CLASSES/Algebra")?;
    assert_eq!(class.params.get("name"), Some("Algebra"));
    Ok(())
}

#[test]
fn write_notice_breadcrumb_is_static() -> TestResult {
    let resolved = table()?.resolve("/notices/write")?;
    assert_eq!(
        resolved.breadcrumbs(Some("ignored")),
        vec![
            link("대문", RouteName::Home, "/"),
            link("공지", RouteName::Notices, "/notices"),
            BreadcrumbEntry::here("편집"),
        ]
    );
    Ok(())
}

#[test]
fn notice_breadcrumb_appends_title() -> TestResult {
    let resolved = table()?.resolve("/notices/42")?;
    assert_eq!(
        resolved.breadcrumbs(Some("T")),
        vec![
            link("대문", RouteName::Home, "/"),
            link("공지", RouteName::Notices, "/notices"),
            BreadcrumbEntry::here("T"),
        ]
    );
    Ok(())
}

#[test]
fn home_breadcrumb_is_plain_root() -> TestResult {
    let resolved = table()?.resolve("/")?;
    assert_eq!(resolved.breadcrumbs(None), vec![BreadcrumbEntry::here("대문")]);
    assert_eq!(resolved.view, ViewSource::Eager(ViewKind::HomeView));
    Ok(())
}

#[test]
fn admin_children_render_inside_admin_without_breadcrumb() -> TestResult {
    let table = table()?;
    let resolved = table.resolve("/admin/members")?;
    assert_eq!(resolved.name, None);
    assert_eq!(resolved.view, ViewSource::Lazy(ViewKind::AdminMemberList));
    assert_eq!(resolved.layout, vec![ViewKind::AdminView]);
    assert_eq!(resolved.matched.len(), 2);
    assert!(resolved.breadcrumb.is_none());
    assert!(resolved.breadcrumbs(None).is_empty());

    let admin = table.resolve("/admin")?;
    assert_eq!(admin.name, Some(RouteName::Admin));
    assert!(admin.layout.is_empty());
    assert_eq!(
        table.resolve("/admin/club-information")?.view.kind(),
        ViewKind::AdminClubInformationView
    );
    assert_eq!(
        table.resolve("/admin/classes")?.view.kind(),
        ViewKind::AdminClassInformationView
    );
    Ok(())
}

#[test]
fn unknown_paths_do_not_match() -> TestResult {
    let table = table()?;
    for path in ["/does-not-exist", "/notices/1/2/3", "/admin/unknown"] {
        assert_eq!(
            table.resolve(path).err(),
            Some(RouteError::NotFound {
                path: path.to_string()
            })
        );
    }
    Ok(())
}

#[test]
fn non_numeric_notice_numbers_are_rejected() -> TestResult {
    assert_eq!(
        table()?.resolve("/notices/abc").err(),
        Some(RouteError::InvalidParam {
            param: "no".to_string(),
            value: "abc".to_string(),
        })
    );
    Ok(())
}

#[test]
fn encoded_class_names_are_decoded_and_reencoded() -> TestResult {
    let table = table()?;
    let resolved = table.resolve("/classes/%EB%8C%80%EC%88%98")?;
    assert_eq!(resolved.params.get("name"), Some("대수"));
    assert_eq!(resolved.path, "/classes/%EB%8C%80%EC%88%98");
    Ok(())
}

#[test]
fn base_url_prefixes_links_and_locations() -> TestResult {
    let table = RouteTable::club(BaseUrl::parse("/club")?)?;
    assert_eq!(
        table.href(RouteName::Notice, &Params::new().with("no", "3"))?,
        "/club/notices/3"
    );
    assert_eq!(table.href(RouteName::Home, &Params::new())?, "/club/");

    let resolved = table.resolve_location("/club/notices/write")?;
    assert_eq!(resolved.name, Some(RouteName::WriteNotice));
    assert_eq!(
        resolved.breadcrumbs(None)[1].href.as_deref(),
        Some("/club/notices")
    );
    assert!(matches!(
        table.resolve_location("/notices/write"),
        Err(RouteError::NotFound { .. })
    ));
    Ok(())
}

#[test]
fn href_requires_declared_params() -> TestResult {
    let table = table()?;
    assert_eq!(
        table.href(RouteName::ClassRecord, &Params::new().with("name", "algebra")),
        Err(RouteError::MissingParam {
            route: "classRecord".to_string(),
            param: "conducted".to_string(),
        })
    );
    Ok(())
}

#[test]
fn listing_marks_lazy_views_and_params() -> TestResult {
    let summaries = table()?.routes();
    assert_eq!(summaries.len(), RouteName::ALL.len() + 3);
    let notice = summaries
        .iter()
        .find(|summary| summary.name == Some(RouteName::Notice))
        .ok_or("notice missing")?;
    assert_eq!(notice.params, vec!["no"]);
    assert!(notice.view.is_lazy());
    assert!(notice.breadcrumb);
    let eager: Vec<_> = summaries
        .iter()
        .filter(|summary| !summary.view.is_lazy())
        .filter_map(|summary| summary.name)
        .collect();
    assert_eq!(eager, vec![RouteName::Home]);
    Ok(())
}
