//! Application shell, browser router, and the host that drives navigation.

use std::rc::Rc;

use clubroom_routes::{BaseUrl, Navigation, NavigationError, Navigator, RouteError, RouteTable};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::view::{StatusPanel, StatusPanelProps, ViewPanel};
use crate::routes::{Route, requested_path};
use crate::views::{ViewHandle, ViewRegistry};

/// Navigator shared through context; equality is identity.
#[derive(Clone)]
struct NavigatorHandle(Rc<Navigator<ViewRegistry>>);

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl NavigatorHandle {
    fn base(&self) -> &BaseUrl {
        self.0.table().base()
    }
}

enum Page {
    Loading,
    Ready(Rc<Navigation<ViewHandle>>),
    NotFound(String),
    Failed(String),
}

#[derive(Properties, PartialEq)]
struct ClubAppProps {
    navigator: NavigatorHandle,
}

#[function_component(ClubApp)]
fn club_app(props: &ClubAppProps) -> Html {
    let basename = props.navigator.base().basename();
    let basename = (!basename.is_empty()).then(|| AttrValue::from(basename.to_string()));

    html! {
        <ContextProvider<NavigatorHandle> context={props.navigator.clone()}>
            <BrowserRouter {basename}>
                <header class="topbar">
                    <nav class="menu">
                        {for nav_links().into_iter().map(|(route, label)| html! {
                            <Link<Route> to={route}>{label}</Link<Route>>
                        })}
                    </nav>
                </header>
                <main class="page">
                    <Switch<Route> render={|route: Route| html! {
                        <RoutedPage {route} />
                    }} />
                </main>
            </BrowserRouter>
        </ContextProvider<NavigatorHandle>>
    }
}

fn nav_links() -> [(Route, &'static str); 7] {
    [
        (Route::Home, "대문"),
        (Route::About, "소개"),
        (Route::Rules, "회칙"),
        (Route::Notices, "공지"),
        (Route::Magazines, "문집"),
        (Route::Me, "내 정보"),
        (Route::Admin, "관리"),
    ]
}

#[derive(Properties, PartialEq)]
struct RoutedPageProps {
    route: Route,
}

/// Hands the host a path to resolve. Locations the browser router does not
/// know are resolved by their own path, so the table decides what is missing.
#[function_component(RoutedPage)]
fn routed_page(props: &RoutedPageProps) -> Html {
    let navigator = use_context::<NavigatorHandle>();
    let location = use_location();
    let path = match (&props.route, navigator, location) {
        (Route::NotFound, Some(navigator), Some(location)) => {
            requested_path(navigator.base(), location.path()).to_string()
        }
        (route, ..) => route.to_path(),
    };
    html! { <RouteHost path={AttrValue::from(path)} /> }
}

#[derive(Properties, PartialEq)]
struct RouteHostProps {
    path: AttrValue,
}

#[function_component(RouteHost)]
fn route_host(props: &RouteHostProps) -> Html {
    let navigator = use_context::<NavigatorHandle>();
    let page = use_state(|| Page::Loading);
    let title = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        let page = page.clone();
        let title = title.clone();
        use_effect_with_deps(
            move |path: &AttrValue| {
                title.set(None);
                page.set(Page::Loading);
                match navigator {
                    Some(NavigatorHandle(navigator)) => {
                        let path = path.to_string();
                        yew::platform::spawn_local(async move {
                            let seq = navigator.next_seq();
                            let outcome = navigator.navigate(&path).await;
                            if !navigator.is_current(seq) {
                                return;
                            }
                            page.set(match outcome {
                                Ok(navigation) => Page::Ready(Rc::new(navigation)),
                                Err(NavigationError::Route(RouteError::NotFound {
                                    path: missing,
                                })) => Page::NotFound(missing),
                                Err(err) => {
                                    console::error!("navigation failed", path, err.to_string());
                                    Page::Failed(err.to_string())
                                }
                            });
                        });
                    }
                    None => page.set(Page::Failed("navigator unavailable".to_string())),
                }
                || ()
            },
            props.path.clone(),
        );
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |text: String| title.set(Some(text)))
    };

    match &*page {
        Page::Loading => html! {
            <StatusPanel title="불러오는 중" body={props.path.clone()} />
        },
        Page::NotFound(path) => html! {
            <StatusPanel title="페이지를 찾을 수 없습니다" body={path.clone()} />
        },
        Page::Failed(message) => html! {
            <StatusPanel title="페이지를 불러오지 못했습니다" body={message.clone()} />
        },
        Page::Ready(navigation) => {
            let entries = navigation.route.breadcrumbs(title.as_deref());
            let base = navigator
                .as_ref()
                .map(|navigator| navigator.base().clone())
                .unwrap_or_default();
            html! {
                <>
                    <Breadcrumbs {entries} {base} />
                    {render_views(navigation, &on_title)}
                </>
            }
        }
    }
}

/// Nests the loaded views, outermost layout first, with props and the title
/// callback going to the leaf only.
fn render_views(navigation: &Navigation<ViewHandle>, on_title: &Callback<String>) -> Html {
    let leaf = navigation.views.len().saturating_sub(1);
    navigation
        .views
        .iter()
        .enumerate()
        .rev()
        .fold(Html::default(), |inner, (index, view)| {
            if index == leaf {
                html! {
                    <ViewPanel
                        view={*view}
                        view_props={navigation.route.props.clone()}
                        on_title={on_title.clone()}
                    >
                        {inner}
                    </ViewPanel>
                }
            } else {
                html! { <ViewPanel view={*view}>{inner}</ViewPanel> }
            }
        })
}

fn build_navigator() -> Result<NavigatorHandle, String> {
    let base = BaseUrl::from_env().map_err(|err| format!("{err}: {err:?}"))?;
    let table = RouteTable::club(base).map_err(|err| format!("{err}: {err:?}"))?;
    Ok(NavigatorHandle(Rc::new(Navigator::new(
        table,
        ViewRegistry::new(),
    ))))
}

/// Mount the club site on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let root = gloo::utils::document().get_element_by_id("root");
    match build_navigator() {
        Ok(navigator) => {
            let props = ClubAppProps { navigator };
            if let Some(root) = root {
                yew::Renderer::<ClubApp>::with_root_and_props(root, props).render();
            } else {
                yew::Renderer::<ClubApp>::with_props(props).render();
            }
        }
        Err(message) => {
            console::error!("clubroom failed to start", message.clone());
            let props = StatusPanelProps {
                title: AttrValue::from("사이트를 시작하지 못했습니다"),
                body: AttrValue::from(message),
            };
            if let Some(root) = root {
                yew::Renderer::<StatusPanel>::with_root_and_props(root, props).render();
            } else {
                yew::Renderer::<StatusPanel>::with_props(props).render();
            }
        }
    }
}
