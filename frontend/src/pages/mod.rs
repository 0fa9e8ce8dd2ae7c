pub mod cart;
pub mod categories;
pub mod favorites;
pub mod history;
pub mod home;
pub mod login;
pub mod profile;
pub mod settings;
pub mod vouchers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Categories,
    Cart,
    Vouchers,
    History,
    Favorites,
    Profile,
    Settings,
    Login,
}

impl Page {
    /// Pages reachable from the bottom navigation, in display order
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::Categories,
        Page::Favorites,
        Page::Cart,
        Page::Vouchers,
        Page::History,
        Page::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Trang chủ",
            Page::Categories => "Danh mục",
            Page::Cart => "Giỏ hàng",
            Page::Vouchers => "Voucher",
            Page::History => "Lịch sử",
            Page::Favorites => "Yêu thích",
            Page::Profile => "Tài khoản",
            Page::Settings => "Cài đặt",
            Page::Login => "Đăng nhập",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Categories => "📂",
            Page::Cart => "🛒",
            Page::Vouchers => "🎟",
            Page::History => "🧾",
            Page::Favorites => "♥",
            Page::Profile => "👤",
            Page::Settings => "⚙",
            Page::Login => "🔑",
        }
    }
}
