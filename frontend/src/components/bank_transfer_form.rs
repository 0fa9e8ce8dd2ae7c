use shared::validation::{FIELD_ACCOUNT_NAME, FIELD_ACCOUNT_NUMBER, FIELD_BANK_NAME};
use shared::{BankDetails, FieldErrors};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const BANKS: [&str; 5] = ["Vietcombank", "VietinBank", "BIDV", "Techcombank", "MB Bank"];

#[derive(Properties, PartialEq)]
pub struct BankTransferFormProps {
    pub details: BankDetails,
    pub errors: FieldErrors,
    pub disabled: bool,
    pub on_change: Callback<BankDetails>,
}

#[function_component(BankTransferForm)]
pub fn bank_transfer_form(props: &BankTransferFormProps) -> Html {
    let on_bank_change = {
        let on_change = props.on_change.clone();
        let details = props.details.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(BankDetails {
                bank_name: select.value(),
                ..details.clone()
            });
        })
    };

    let on_number_input = {
        let on_change = props.on_change.clone();
        let details = props.details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BankDetails {
                account_number: input.value(),
                ..details.clone()
            });
        })
    };

    let on_name_input = {
        let on_change = props.on_change.clone();
        let details = props.details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BankDetails {
                account_name: input.value(),
                ..details.clone()
            });
        })
    };

    let field_error = |field: &str| -> Html {
        match props.errors.get(field) {
            Some(message) => html! { <div class="field-error">{message}</div> },
            None => html! {},
        }
    };
    let invalid = |field: &str| props.errors.contains_key(field).then_some("invalid");

    html! {
        <div class="bank-transfer-form">
            <h4>{"Thông tin chuyển khoản"}</h4>

            <div class="form-group">
                <label for="bank-name">{"Ngân hàng"}</label>
                <select
                    id="bank-name"
                    class={classes!(invalid(FIELD_BANK_NAME))}
                    onchange={on_bank_change}
                    disabled={props.disabled}
                >
                    <option value="" selected={props.details.bank_name.is_empty()}>
                        {"-- Chọn ngân hàng --"}
                    </option>
                    {for BANKS.iter().map(|bank| html! {
                        <option value={*bank} selected={props.details.bank_name == *bank}>{*bank}</option>
                    })}
                </select>
                {field_error(FIELD_BANK_NAME)}
            </div>

            <div class="form-group">
                <label for="account-number">{"Số tài khoản"}</label>
                <input
                    type="text"
                    id="account-number"
                    inputmode="numeric"
                    placeholder="8-16 chữ số"
                    class={classes!(invalid(FIELD_ACCOUNT_NUMBER))}
                    value={props.details.account_number.clone()}
                    oninput={on_number_input}
                    disabled={props.disabled}
                />
                {field_error(FIELD_ACCOUNT_NUMBER)}
            </div>

            <div class="form-group">
                <label for="account-name">{"Tên chủ tài khoản"}</label>
                <input
                    type="text"
                    id="account-name"
                    placeholder="NGUYEN VAN A"
                    class={classes!(invalid(FIELD_ACCOUNT_NAME))}
                    value={props.details.account_name.clone()}
                    oninput={on_name_input}
                    disabled={props.disabled}
                />
                {field_error(FIELD_ACCOUNT_NAME)}
            </div>
        </div>
    }
}
