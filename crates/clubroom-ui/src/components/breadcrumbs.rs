//! Breadcrumb trail rendered above each page.

use clubroom_routes::{BaseUrl, BreadcrumbEntry};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub(crate) struct BreadcrumbsProps {
    pub entries: Vec<BreadcrumbEntry>,
    pub base: BaseUrl,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Breadcrumbs)]
pub(crate) fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }
    html! {
        <nav class={classes!("breadcrumbs", props.class.clone())} aria-label="Breadcrumb">
            <ol>
                {for props.entries.iter().map(|entry| {
                    let route = entry
                        .href
                        .as_deref()
                        .and_then(|href| Route::from_href(&props.base, href));
                    html! {
                        <li>
                            {match (route, entry.href.clone()) {
                                (Some(route), _) => html! { <Link<Route> to={route}>{entry.text.clone()}</Link<Route>> },
                                (None, Some(href)) => html! { <a href={href}>{entry.text.clone()}</a> },
                                (None, None) => html! { <span aria-current="page">{entry.text.clone()}</span> },
                            }}
                        </li>
                    }
                })}
            </ol>
        </nav>
    }
}
