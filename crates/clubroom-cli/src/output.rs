//! Output renderers for CLI commands.

use anyhow::anyhow;
use clubroom_routes::{BreadcrumbEntry, ResolvedRoute, RouteSummary, RouteTable, ViewSource};
use serde_json::{Value, json};

use crate::cli::{CliError, CliResult, OutputFormat};

pub(crate) fn render_routes(routes: &[RouteSummary], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "routes": routes })),
        OutputFormat::Table => {
            let mut lines = vec![format!(
                "{:<18} {:<28} {:<26} {:<5} CRUMBS",
                "NAME", "PATH", "VIEW", "LOAD"
            )];
            for summary in routes {
                let name = summary.name.map_or("-", |name| name.as_str());
                lines.push(format!(
                    "{:<18} {:<28} {:<26} {:<5} {}",
                    name,
                    summary.path,
                    summary.view.kind(),
                    load_label(summary.view),
                    if summary.breadcrumb { "yes" } else { "no" }
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_resolved(
    resolved: &ResolvedRoute,
    title: Option<&str>,
    format: OutputFormat,
) -> CliResult<String> {
    let breadcrumbs = resolved.breadcrumbs(title);
    match format {
        OutputFormat::Json => to_json(&json!({
            "route": resolved,
            "breadcrumbs": breadcrumbs,
        })),
        OutputFormat::Table => {
            let mut lines = vec![
                format!(
                    "name: {}",
                    resolved.name.map_or("<anonymous>", |name| name.as_str())
                ),
                format!("pattern: {}", resolved.pattern),
                format!("path: {}", resolved.path),
                format!(
                    "view: {} ({})",
                    resolved.view.kind(),
                    load_label(resolved.view)
                ),
            ];
            if !resolved.layout.is_empty() {
                let layout: Vec<_> = resolved.layout.iter().map(ToString::to_string).collect();
                lines.push(format!("layout: {}", layout.join(" > ")));
            }
            if !resolved.params.is_empty() {
                let params: Vec<_> = resolved
                    .params
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect();
                lines.push(format!("params: {}", params.join(", ")));
            }
            if let Some(props) = &resolved.props {
                let props = serde_json::to_string(props)
                    .map_err(|err| CliError::failure(anyhow!("failed to format props: {err}")))?;
                lines.push(format!("props: {props}"));
            }
            if !breadcrumbs.is_empty() {
                lines.push(format!("breadcrumb: {}", breadcrumb_line(&breadcrumbs)));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_href(href: &str, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "href": href })),
        OutputFormat::Table => Ok(href.to_string()),
    }
}

pub(crate) fn render_check(table: &RouteTable, format: OutputFormat) -> CliResult<String> {
    let count = table.routes().len();
    match format {
        OutputFormat::Json => to_json(&json!({
            "ok": true,
            "routes": count,
            "base_url": table.base(),
        })),
        OutputFormat::Table => Ok(format!("ok: {count} routes under {}", table.base())),
    }
}

fn breadcrumb_line(entries: &[BreadcrumbEntry]) -> String {
    entries
        .iter()
        .map(|entry| match &entry.href {
            Some(href) => format!("{} <{href}>", entry.text),
            None => entry.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

const fn load_label(view: ViewSource) -> &'static str {
    if view.is_lazy() { "lazy" } else { "eager" }
}

fn to_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}
