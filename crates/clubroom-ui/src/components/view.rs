//! Page panels mounted for loaded views.

use clubroom_routes::ViewProps;
use yew::prelude::*;

use crate::views::ViewHandle;

#[derive(Properties, PartialEq)]
pub(crate) struct ViewPanelProps {
    pub view: ViewHandle,
    #[prop_or_default]
    pub view_props: Option<ViewProps>,
    /// Receives the headline once the view is mounted; leaf views only.
    #[prop_or_default]
    pub on_title: Option<Callback<String>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ViewPanel)]
pub(crate) fn view_panel(props: &ViewPanelProps) -> Html {
    let title = props.view.title(props.view_props.as_ref());
    {
        let on_title = props.on_title.clone();
        use_effect_with_deps(
            move |title: &String| {
                if let Some(on_title) = on_title {
                    on_title.emit(title.clone());
                }
                || ()
            },
            title.clone(),
        );
    }
    let details = props
        .view_props
        .as_ref()
        .and_then(|value| serde_json::to_string(value).ok());

    html! {
        <section class="view" data-view={props.view.kind.as_str()}>
            <h2>{title}</h2>
            {details.map(|details| html! { <pre class="muted">{details}</pre> }).unwrap_or_default()}
            {for props.children.iter()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatusPanelProps {
    pub title: AttrValue,
    pub body: AttrValue,
}

/// Placeholder shown while a page is pending or unavailable.
#[function_component(StatusPanel)]
pub(crate) fn status_panel(props: &StatusPanelProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}
