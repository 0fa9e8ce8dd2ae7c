use shared::AppConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::nav_bar::NavBar;
use pages::cart::CartPage;
use pages::categories::CategoriesPage;
use pages::favorites::FavoritesPage;
use pages::history::HistoryPage;
use pages::home::HomePage;
use pages::login::LoginPage;
use pages::profile::ProfilePage;
use pages::settings::SettingsPage;
use pages::vouchers::VouchersPage;
use pages::Page;
use services::api::{load_config, MockApi};
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api = use_memo(props.config.clone(), |config| {
        MockApi::with_config(config.clone())
    });
    let page = use_state(|| Page::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("Navigating to {:?}", next));
            page.set(next);
        })
    };

    let api = (*api).clone();
    let content = match *page {
        Page::Home => html! { <HomePage {api} on_navigate={on_navigate.clone()} /> },
        Page::Categories => html! { <CategoriesPage {api} /> },
        Page::Cart => html! { <CartPage {api} on_navigate={on_navigate.clone()} /> },
        Page::Vouchers => html! { <VouchersPage {api} /> },
        Page::History => html! { <HistoryPage {api} /> },
        Page::Favorites => html! { <FavoritesPage {api} on_navigate={on_navigate.clone()} /> },
        Page::Profile => html! { <ProfilePage {api} on_navigate={on_navigate.clone()} /> },
        Page::Settings => html! { <SettingsPage {api} /> },
        Page::Login => html! { <LoginPage on_navigate={on_navigate.clone()} /> },
    };

    html! {
        <div class="app">
            {if *page == Page::Login {
                content
            } else {
                html! {
                    <>
                        <NavBar current={*page} on_navigate={on_navigate.clone()} />
                        <main class="container">{content}</main>
                    </>
                }
            }}
        </div>
    }
}

fn main() {
    let config = load_config();
    Logger::init(config.log_level);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
