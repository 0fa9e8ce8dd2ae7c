use shared::{format_vnd, CountdownTimer};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentModalProps {
    pub timer: CountdownTimer,
    pub amount: f64,
    pub on_paid: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// QR payment dialog. Only rendered while the countdown is running, so it
/// disappears on its own once the payment window expires.
#[function_component(PaymentModal)]
pub fn payment_modal(props: &PaymentModalProps) -> Html {
    if !props.timer.is_running() {
        return html! {};
    }

    let on_paid_click = {
        let on_paid = props.on_paid.clone();
        Callback::from(move |_: MouseEvent| on_paid.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let urgent = props.timer.remaining_seconds() <= 60;

    html! {
        <div class="modal-backdrop">
            <div class="payment-modal">
                <h3>{"Quét mã QR để thanh toán"}</h3>
                <div class="qr-placeholder">
                    <span>{"QR"}</span>
                </div>
                <p class="payment-amount">{format_vnd(props.amount)}</p>
                <p class={classes!("payment-countdown", urgent.then_some("urgent"))}>
                    {"Mã QR hết hạn sau "}
                    <strong>{props.timer.display()}</strong>
                </p>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"Hủy"}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={on_paid_click}>
                        {"Tôi đã thanh toán"}
                    </button>
                </div>
            </div>
        </div>
    }
}
