use gloo::storage::{SessionStorage, Storage};
use shared::{format_vnd, UserProfile};
use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::hooks::use_seed_data::use_seed_data;
use crate::services::api::MockApi;
use crate::services::logging::Logger;

use super::Page;

const COMPONENT: &str = "profile-page";

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub api: MockApi,
    pub on_navigate: Callback<Page>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let profile = use_state(|| Option::<UserProfile>::None);

    let on_loaded = {
        let profile = profile.clone();
        Callback::from(move |loaded| profile.set(Some(loaded)))
    };
    let status = {
        let api = props.api.clone();
        use_seed_data(
            COMPONENT,
            api.config().loading_delay_ms,
            move || api.get_profile(),
            on_loaded,
        )
    };

    let on_logout = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm("Bạn có chắc chắn muốn đăng xuất?") {
                return;
            }
            SessionStorage::clear();
            Logger::info_with_component(COMPONENT, "Signed out, session storage cleared");
            on_navigate.emit(Page::Login);
        })
    };

    let nav_button = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
        html! {
            <button type="button" class="menu-item" {onclick}>
                <span>{page.icon()}</span>
                <span>{page.title()}</span>
                <span class="menu-arrow">{"›"}</span>
            </button>
        }
    };

    html! {
        <div class="page profile-page">
            <LoadStatusView {status}>
                {if let Some(user) = (*profile).as_ref() {
                    html! {
                        <>
                            <section class="profile-card">
                                <div class="avatar">{user.initials()}</div>
                                <div class="profile-info">
                                    <h3>{&user.name}</h3>
                                    <p>{format!("MSSV: {}", user.student_id)}</p>
                                </div>
                                <div class="profile-balance">
                                    <span class="balance-label">{"Số dư"}</span>
                                    <span class="balance-amount">{format_vnd(user.balance)}</span>
                                </div>
                            </section>

                            <section class="profile-details">
                                <div class="profile-field">
                                    <label class="profile-label">{"Email"}</label>
                                    <div class="profile-value">{&user.email}</div>
                                </div>
                                <div class="profile-field">
                                    <label class="profile-label">{"Số điện thoại"}</label>
                                    <div class="profile-value">{&user.phone}</div>
                                </div>
                            </section>
                        </>
                    }
                } else { html! {} }}
            </LoadStatusView>

            <section class="profile-menu">
                {nav_button(Page::History)}
                {nav_button(Page::Favorites)}
                {nav_button(Page::Vouchers)}
                {nav_button(Page::Settings)}
            </section>

            <button type="button" class="btn btn-danger logout-btn" onclick={on_logout}>
                {"Đăng xuất"}
            </button>
        </div>
    }
}
