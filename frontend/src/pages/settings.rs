use shared::{Language, Settings};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::hooks::use_toast::use_toast;
use crate::services::api::MockApi;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub api: MockApi,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let settings = use_state(Settings::default);
    let toast = use_toast(props.api.config().toast_duration_ms);

    let toggle = |update: fn(&mut Settings)| {
        let settings = settings.clone();
        Callback::from(move |_: Event| {
            let mut next = (*settings).clone();
            update(&mut next);
            settings.set(next);
        })
    };

    let on_language_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(language) = Language::from_code(&select.value()) {
                settings.set(Settings {
                    language,
                    ..(*settings).clone()
                });
            }
        })
    };

    let on_save = {
        let settings = settings.clone();
        let show = toast.show.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("settings-page", &format!("Saving {:?}", *settings));
            show.emit("Đã lưu cài đặt".to_string());
        })
    };

    // "Hủy" discards edits by going back to the defaults
    let on_cancel = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.set(settings.cancelled()))
    };

    let switch = |id: &'static str, label: &'static str, checked: bool, onchange: Callback<Event>| {
        html! {
            <div class="setting-row">
                <label for={id}>{label}</label>
                <input type="checkbox" class="switch" id={id} {checked} {onchange} />
            </div>
        }
    };

    html! {
        <div class="page settings-page">
            <section class="settings-group">
                <h4>{"Thông báo"}</h4>
                {switch("notifications", "Nhận thông báo khuyến mãi", settings.notifications,
                    toggle(|s| s.notifications = !s.notifications))}
                {switch("order-updates", "Cập nhật trạng thái đơn hàng", settings.order_updates,
                    toggle(|s| s.order_updates = !s.order_updates))}
            </section>

            <section class="settings-group">
                <h4>{"Giao diện"}</h4>
                {switch("dark-mode", "Chế độ tối", settings.dark_mode,
                    toggle(|s| s.dark_mode = !s.dark_mode))}
                <div class="setting-row">
                    <label for="language">{"Ngôn ngữ"}</label>
                    <select id="language" onchange={on_language_change}>
                        {for Language::ALL.into_iter().map(|language| html! {
                            <option value={language.code()} selected={settings.language == language}>
                                {language.label()}
                            </option>
                        })}
                    </select>
                </div>
            </section>

            <div class="settings-buttons">
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Hủy"}</button>
                <button type="button" class="btn btn-primary" onclick={on_save}>{"Lưu thay đổi"}</button>
            </div>

            <Toast message={toast.message.clone()} />
        </div>
    }
}
