pub mod bank_transfer_form;
pub mod cart_line_item;
pub mod cart_summary;
pub mod load_status_view;
pub mod nav_bar;
pub mod order_card;
pub mod payment_modal;
pub mod product_card;
pub mod toast;
pub mod voucher_card;
pub mod voucher_filters;
