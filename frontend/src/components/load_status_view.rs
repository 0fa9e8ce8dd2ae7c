use yew::prelude::*;

use crate::hooks::use_seed_data::LoadStatus;

#[derive(Properties, PartialEq)]
pub struct LoadStatusViewProps {
    pub status: LoadStatus,
    #[prop_or_default]
    pub children: Children,
}

/// Spinner while loading, error text on failure, children once ready.
#[function_component(LoadStatusView)]
pub fn load_status_view(props: &LoadStatusViewProps) -> Html {
    match &props.status {
        LoadStatus::Loading => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{"Đang tải..."}</p>
            </div>
        },
        LoadStatus::Failed(message) => html! {
            <div class="form-message error">{message}</div>
        },
        LoadStatus::Ready => html! { <>{props.children.clone()}</> },
    }
}
