use shared::validation::validate_checkout;
use shared::{BankDetails, FieldErrors, PaymentMethod};
use yew::prelude::*;

use crate::components::bank_transfer_form::BankTransferForm;
use crate::components::cart_line_item::CartLineItem;
use crate::components::cart_summary::CartSummary;
use crate::components::load_status_view::LoadStatusView;
use crate::components::payment_modal::PaymentModal;
use crate::hooks::use_cart::use_cart;
use crate::hooks::use_countdown::use_countdown;
use crate::hooks::use_delayed_task::use_delayed_task;
use crate::services::api::MockApi;
use crate::services::logging::Logger;

use super::Page;

const COMPONENT: &str = "cart-page";

#[derive(Properties, PartialEq)]
pub struct CartPageProps {
    pub api: MockApi,
    pub on_navigate: Callback<Page>,
}

#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    let config = props.api.config().clone();
    let cart = use_cart(&props.api);
    let countdown = use_countdown(config.payment_timeout_secs);
    let processing_task = use_delayed_task();

    let payment_method = use_state(PaymentMethod::default);
    let bank_details = use_state(BankDetails::default);
    let field_errors = use_state(FieldErrors::new);
    let processing = use_state(|| false);
    let success_message = use_state(|| Option::<String>::None);

    // Simulated POST /orders followed by the processing delay
    let submit_order = {
        let api = props.api.clone();
        let lines = cart.lines.clone();
        let totals = cart.totals;
        let method = *payment_method;
        let begin_checkout = cart.actions.begin_checkout.clone();
        let clear_cart = cart.actions.clear.clone();
        let processing = processing.clone();
        let success_message = success_message.clone();
        let bank_details = bank_details.clone();
        let processing_task = processing_task.clone();
        let delay_ms = config.processing_delay_ms;

        Callback::from(move |_| {
            Logger::info_with_component(
                COMPONENT,
                &format!("Processing order via {}", method.label()),
            );
            processing.set(true);
            begin_checkout.emit(());

            let api = api.clone();
            let lines = lines.clone();
            let clear_cart = clear_cart.clone();
            let processing = processing.clone();
            let success_message = success_message.clone();
            let bank_details = bank_details.clone();
            processing_task.schedule(delay_ms, move || {
                let order = api.place_order(&lines, &totals, method);
                clear_cart.emit(());
                bank_details.set(BankDetails::default());
                processing.set(false);
                success_message.set(Some(format!(
                    "Đặt hàng thành công! Mã đơn của bạn là {}",
                    order.short_code()
                )));
            });
        })
    };

    let on_checkout = {
        let method = *payment_method;
        let details = (*bank_details).clone();
        let field_errors = field_errors.clone();
        let start_countdown = countdown.start.clone();
        let submit_order = submit_order.clone();

        Callback::from(move |_: MouseEvent| {
            let errors = validate_checkout(method, &details);
            let valid = errors.is_empty();
            field_errors.set(errors);
            if !valid {
                Logger::debug_with_component(COMPONENT, "Bank details failed validation");
                return;
            }

            if method == PaymentMethod::QrCode {
                Logger::info_with_component(COMPONENT, "Opening QR payment window");
                start_countdown.emit(());
            } else {
                submit_order.emit(());
            }
        })
    };

    let on_paid = {
        let cancel_countdown = countdown.cancel.clone();
        let submit_order = submit_order.clone();
        Callback::from(move |_| {
            cancel_countdown.emit(());
            submit_order.emit(());
        })
    };

    let on_method_change = {
        let payment_method = payment_method.clone();
        let field_errors = field_errors.clone();
        move |method: PaymentMethod| {
            let payment_method = payment_method.clone();
            let field_errors = field_errors.clone();
            Callback::from(move |_: Event| {
                payment_method.set(method);
                field_errors.set(FieldErrors::new());
            })
        }
    };

    let on_bank_details_change = {
        let bank_details = bank_details.clone();
        Callback::from(move |details: BankDetails| bank_details.set(details))
    };

    let on_continue_shopping = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home))
    };

    let busy = *processing || countdown.timer.is_running();

    html! {
        <div class="page cart-page">
            {if let Some(message) = (*success_message).as_ref() {
                html! { <div class="form-message success">{message}</div> }
            } else { html! {} }}

            {if countdown.expired {
                html! {
                    <div class="form-message error">
                        {"Mã QR đã hết hạn. Vui lòng thanh toán lại."}
                    </div>
                }
            } else { html! {} }}

            <LoadStatusView status={cart.status.clone()}>
                {if cart.lines.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"Giỏ hàng của bạn đang trống"}</p>
                            <button type="button" class="btn btn-primary" onclick={on_continue_shopping}>
                                {"Tiếp tục mua sắm"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <h3 class="section-title">{format!("{} món trong giỏ", cart.item_count)}</h3>
                            <div class="cart-lines">
                                {for cart.lines.iter().map(|line| html! {
                                    <CartLineItem
                                        key={line.id.clone()}
                                        line={line.clone()}
                                        on_quantity_change={cart.actions.update_quantity.clone()}
                                        on_remove={cart.actions.remove.clone()}
                                        disabled={busy}
                                    />
                                })}
                            </div>

                            <CartSummary totals={cart.totals} tax_rate={config.tax_rate} />

                            <section class="payment-methods">
                                <h4>{"Phương thức thanh toán"}</h4>
                                {for PaymentMethod::ALL.into_iter().map(|method| html! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="payment-method"
                                            checked={*payment_method == method}
                                            onchange={on_method_change(method)}
                                            disabled={busy}
                                        />
                                        {method.label()}
                                    </label>
                                })}
                            </section>

                            {if payment_method.requires_bank_details() {
                                html! {
                                    <BankTransferForm
                                        details={(*bank_details).clone()}
                                        errors={(*field_errors).clone()}
                                        disabled={busy}
                                        on_change={on_bank_details_change}
                                    />
                                }
                            } else { html! {} }}

                            <button
                                type="button"
                                class="btn btn-primary checkout-btn"
                                onclick={on_checkout}
                                disabled={busy}
                            >
                                {if *processing { "Đang xử lý..." } else { "Thanh toán" }}
                            </button>
                        </>
                    }
                }}
            </LoadStatusView>

            <PaymentModal
                timer={countdown.timer}
                amount={cart.totals.total}
                on_paid={on_paid}
                on_cancel={countdown.cancel.clone()}
            />
        </div>
    }
}
