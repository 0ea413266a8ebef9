//! Server-rendered pages of the storefront.

mod contact;
mod fields;
mod home;
mod layout;
mod not_found;
mod repairs;
mod sell;
mod shop;
mod swap;

pub use contact::render_contact;
pub use home::{render_home, HomeContent};
pub use layout::render_page;
pub use not_found::render_not_found;
pub use repairs::render_repairs;
pub use sell::render_sell;
pub use shop::render_shop;
pub use swap::render_swap;

/// Top level page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    Sell,
    Swap,
    Repairs,
    Contact,
    NotFound,
}

impl Route {
    /// Resolves a request path. Every path maps to a route.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/shop" => Route::Shop,
            "/sell" => Route::Sell,
            "/swap" => Route::Swap,
            "/repairs" => Route::Repairs,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Shop => "/shop",
            Route::Sell => "/sell",
            Route::Swap => "/swap",
            Route::Repairs => "/repairs",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Gadget Haven Abuja | Phones, Laptops, Swaps & Repairs",
            Route::Shop => "Shop Gadgets | Gadget Haven",
            Route::Sell => "Sell Your Device | Gadget Haven",
            Route::Swap => "Swap Your Device | Gadget Haven",
            Route::Repairs => "Repairs | Gadget Haven",
            Route::Contact => "Contact Us | Gadget Haven",
            Route::NotFound => "Page Not Found | Gadget Haven",
        }
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
