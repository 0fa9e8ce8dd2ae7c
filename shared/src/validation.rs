use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to inline error message. Empty means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const FIELD_BANK_NAME: &str = "bankName";
pub const FIELD_ACCOUNT_NUMBER: &str = "accountNumber";
pub const FIELD_ACCOUNT_NAME: &str = "accountName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

const ACCOUNT_NUMBER_MIN_DIGITS: usize = 8;
const ACCOUNT_NUMBER_MAX_DIGITS: usize = 16;

/// Bank transfer details entered at checkout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

/// How the order is paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    QrCode,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::QrCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Tiền mặt",
            PaymentMethod::BankTransfer => "Chuyển khoản ngân hàng",
            PaymentMethod::QrCode => "Quét mã QR",
        }
    }

    pub fn requires_bank_details(self) -> bool {
        matches!(self, PaymentMethod::BankTransfer)
    }
}

/// Check bank transfer fields, one message per failing field.
pub fn validate_bank_details(details: &BankDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if details.bank_name.trim().is_empty() {
        errors.insert(FIELD_BANK_NAME, "Vui lòng chọn ngân hàng".to_string());
    }

    if details.account_number.is_empty() {
        errors.insert(FIELD_ACCOUNT_NUMBER, "Vui lòng nhập số tài khoản".to_string());
    } else if !is_valid_account_number(&details.account_number) {
        errors.insert(
            FIELD_ACCOUNT_NUMBER,
            format!(
                "Số tài khoản phải gồm {}-{} chữ số",
                ACCOUNT_NUMBER_MIN_DIGITS, ACCOUNT_NUMBER_MAX_DIGITS
            ),
        );
    }

    if details.account_name.trim().is_empty() {
        errors.insert(FIELD_ACCOUNT_NAME, "Vui lòng nhập tên chủ tài khoản".to_string());
    }

    errors
}

/// Validation for the checkout step; only bank transfers carry fields to check.
pub fn validate_checkout(method: PaymentMethod, details: &BankDetails) -> FieldErrors {
    if method.requires_bank_details() {
        validate_bank_details(details)
    } else {
        FieldErrors::new()
    }
}

/// Presence check for the login form, plus an `@` in the email
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let email = email.trim();

    if email.is_empty() {
        errors.insert(FIELD_EMAIL, "Vui lòng nhập email".to_string());
    } else if !email.contains('@') {
        errors.insert(FIELD_EMAIL, "Email không hợp lệ".to_string());
    }

    if password.is_empty() {
        errors.insert(FIELD_PASSWORD, "Vui lòng nhập mật khẩu".to_string());
    }

    errors
}

fn is_valid_account_number(value: &str) -> bool {
    (ACCOUNT_NUMBER_MIN_DIGITS..=ACCOUNT_NUMBER_MAX_DIGITS).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}
