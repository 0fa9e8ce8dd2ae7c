use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_settings_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Settings))
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"🍱 Canteen"}</h1>
                    <div class="header-right">
                        <span class="page-title">{props.current.title()}</span>
                        <button type="button" class="icon-btn" onclick={on_settings_click} title="Cài đặt">
                            {"⚙"}
                        </button>
                    </div>
                </div>
            </header>
            <nav class="bottom-nav">
                {for Page::NAV.into_iter().map(|page| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("nav-item", (page == props.current).then_some("active"))}
                            {onclick}
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            <span class="nav-label">{page.title()}</span>
                        </button>
                    }
                })}
            </nav>
        </>
    }
}
