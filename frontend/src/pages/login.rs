use gloo::storage::{SessionStorage, Storage};
use shared::validation::{validate_login, FIELD_EMAIL, FIELD_PASSWORD};
use shared::FieldErrors;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

use super::Page;

const COMPONENT: &str = "login-page";
pub const SESSION_USER_KEY: &str = "canteen.user";

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<Page>,
}

/// Client-side only sign in: presence checks, then the email is kept in
/// session storage until logout.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FieldErrors::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let found = validate_login(&email, &password);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());

            let user = email.trim().to_string();
            if let Err(e) = SessionStorage::set(SESSION_USER_KEY, &user) {
                Logger::warn_with_component(COMPONENT, &format!("Could not store session: {}", e));
            }
            Logger::info_with_component(COMPONENT, &format!("Signed in as {}", user));
            on_navigate.emit(Page::Home);
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! { <div class="field-error">{message}</div> },
            None => html! {},
        }
    };

    html! {
        <div class="page login-page">
            <div class="login-card">
                <h2>{"🍱 Canteen"}</h2>
                <p class="login-subtitle">{"Đăng nhập để đặt món nhanh hơn"}</p>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="sinhvien@canteen.edu.vn"
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                        {field_error(FIELD_EMAIL)}
                    </div>

                    <div class="form-group">
                        <label for="password">{"Mật khẩu"}</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                        {field_error(FIELD_PASSWORD)}
                    </div>

                    <button type="submit" class="btn btn-primary login-btn">{"Đăng nhập"}</button>
                </form>
            </div>
        </div>
    }
}
