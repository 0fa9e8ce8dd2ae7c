use std::rc::Rc;

use shared::VoucherTab;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoucherFiltersProps {
    pub tab: VoucherTab,
    pub available_count: usize,
    pub saved_count: usize,
    pub search_term: String,
    pub category: String,
    pub categories: Rc<Vec<String>>,
    pub dropdown_open: bool,

    pub on_select_tab: Callback<VoucherTab>,
    pub on_search: Callback<String>,
    pub on_select_category: Callback<String>,
    pub on_toggle_dropdown: Callback<()>,
}

#[function_component(VoucherFilters)]
pub fn voucher_filters(props: &VoucherFiltersProps) -> Html {
    let on_search_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_dropdown_click = {
        let on_toggle_dropdown = props.on_toggle_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle_dropdown.emit(());
        })
    };

    html! {
        <div class="voucher-filters">
            <div class="tabs">
                {for VoucherTab::ALL.into_iter().map(|tab| {
                    let count = match tab {
                        VoucherTab::Available => props.available_count,
                        VoucherTab::Saved => props.saved_count,
                    };
                    let onclick = {
                        let on_select_tab = props.on_select_tab.clone();
                        Callback::from(move |_: MouseEvent| on_select_tab.emit(tab))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("tab", (tab == props.tab).then_some("active"))}
                            {onclick}
                        >
                            {format!("{} ({})", tab.label(), count)}
                        </button>
                    }
                })}
            </div>

            <div class="filter-row">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Tìm kiếm voucher..."
                    value={props.search_term.clone()}
                    oninput={on_search_input}
                />

                <div class={classes!("dropdown", props.dropdown_open.then_some("open"))}>
                    <button type="button" class="dropdown-toggle" onclick={on_dropdown_click}>
                        {&props.category}
                        <span class="dropdown-caret">{if props.dropdown_open { "▴" } else { "▾" }}</span>
                    </button>
                    {if props.dropdown_open {
                        html! {
                            <ul class="dropdown-menu">
                                {for props.categories.iter().map(|category| {
                                    let onclick = {
                                        let on_select_category = props.on_select_category.clone();
                                        let category = category.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            on_select_category.emit(category.clone());
                                        })
                                    };
                                    html! {
                                        <li
                                            class={classes!("dropdown-item", (*category == props.category).then_some("selected"))}
                                            {onclick}
                                        >
                                            {category}
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    } else { html! {} }}
                </div>
            </div>
        </div>
    }
}
