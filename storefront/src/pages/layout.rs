//! Page shell: head, header, footer and the floating WhatsApp button.

use super::{html_escape, Route};
use crate::forms::Notice;
use crate::whatsapp::{WhatsApp, PRICE_QUOTE_MESSAGE};

pub const PHONE_NUMBER: &str = "09076087744";
pub const EMAIL: &str = "hello@gadgethavenabuja.com";
pub const ADDRESS: &str = "Shop A53A, New Banex Plaza, Abuja";
pub const HOURS: &str = "Mon - Sat: 9AM - 7PM";

const STYLES: &str = r#"
:root { --accent: #FF3B30; --ink: #111111; --muted: #666666; --soft: #F5F5F7; --wa: #25D366; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; color: var(--ink); }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.site-header { position: sticky; top: 0; background: #fff; border-bottom: 1px solid #eee; z-index: 10; }
.site-header nav { display: flex; gap: 1.25rem; align-items: center; padding: 1rem 0; }
.site-header .active { color: var(--accent); font-weight: 700; }
.btn { display: inline-block; padding: .75rem 1.25rem; border-radius: 999px; border: 0; background: var(--accent); color: #fff; text-decoration: none; cursor: pointer; font-weight: 600; }
.btn-whatsapp { background: var(--wa); }
.btn-outline { background: transparent; color: var(--ink); border: 2px solid var(--ink); }
.notice { padding: .75rem 1rem; border-radius: .5rem; margin: 1rem 0; }
.notice-success { background: #e7f8ec; color: #116329; }
.notice-error { background: #fdecea; color: #a11b12; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.25rem; }
.card { border: 1px solid #eee; border-radius: 1rem; overflow: hidden; background: #fff; }
.card img { width: 100%; aspect-ratio: 1; object-fit: cover; background: var(--soft); }
.card-body { padding: 1rem; }
.field { display: flex; flex-direction: column; gap: .25rem; margin-bottom: 1rem; }
.field input, .field select, .field textarea { padding: .75rem; border: 2px solid #e5e5e5; border-radius: .5rem; font: inherit; }
.section { padding: 3rem 0; }
.soft { background: var(--soft); }
.tabs { display: flex; gap: .5rem; overflow-x: auto; margin-bottom: 2rem; }
.tab { padding: .5rem 1rem; border-radius: 999px; background: var(--soft); text-decoration: none; white-space: nowrap; }
.tab.active { background: var(--accent); color: #fff; }
.floating-whatsapp { position: fixed; right: 1.5rem; bottom: 1.5rem; width: 3.5rem; height: 3.5rem; border-radius: 50%; background: var(--wa); color: #fff; display: flex; align-items: center; justify-content: center; text-decoration: none; font-size: 1.5rem; }
.site-footer { background: var(--ink); color: #ddd; padding: 3rem 0; margin-top: 3rem; }
"#;

/// Wraps a page body in the site shell
pub fn render_page(route: Route, body: &str, whatsapp: &WhatsApp) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{header}
<main data-route="{route:?}">
{body}
</main>
{footer}
{floating}
</body>
</html>"#,
        title = html_escape(route.title()),
        styles = STYLES,
        header = render_header(route, whatsapp),
        route = route,
        body = body,
        footer = render_footer(whatsapp),
        floating = render_floating_button(whatsapp),
    )
}

fn nav_link(current: Route, target: Route, label: &str) -> String {
    let class = if current == target { r#" class="active""# } else { "" };
    format!(r#"<a href="{}"{}>{}</a>"#, target.path(), class, label)
}

fn render_header(route: Route, whatsapp: &WhatsApp) -> String {
    format!(
        r#"<header class="site-header">
    <div class="container">
        <nav>
            <a href="/"><strong>Gadget Haven</strong></a>
            {home}
            {shop}
            <details>
                <summary>Services</summary>
                {sell}
                {swap}
                {repairs}
            </details>
            {contact}
            <a href="tel:{phone}">{phone}</a>
            <a class="btn btn-whatsapp" href="{wa}" target="_blank" rel="noopener">Get a Quote</a>
        </nav>
    </div>
</header>"#,
        home = nav_link(route, Route::Home, "Home"),
        shop = nav_link(route, Route::Shop, "Shop"),
        sell = nav_link(route, Route::Sell, "Sell Your Device"),
        swap = nav_link(route, Route::Swap, "Swap Device"),
        repairs = nav_link(route, Route::Repairs, "Repairs"),
        contact = nav_link(route, Route::Contact, "Contact"),
        phone = PHONE_NUMBER,
        wa = html_escape(whatsapp.link(PRICE_QUOTE_MESSAGE).as_str()),
    )
}

fn render_footer(whatsapp: &WhatsApp) -> String {
    format!(
        r#"<footer class="site-footer">
    <div class="container grid">
        <div>
            <strong>Gadget Haven</strong>
            <p>Abuja's trusted gadget hub for phones, laptops, swaps and repairs.</p>
        </div>
        <div>
            <p><a href="/shop">Shop</a></p>
            <p><a href="/sell">Sell Your Device</a></p>
            <p><a href="/swap">Swap Device</a></p>
            <p><a href="/repairs">Repairs</a></p>
        </div>
        <div>
            <p><a href="tel:{phone}">{phone}</a></p>
            <p><a href="mailto:{email}">{email}</a></p>
            <p>{address}</p>
            <p>{hours}</p>
            <p><a href="{wa}" target="_blank" rel="noopener">Chat on WhatsApp</a></p>
        </div>
    </div>
</footer>"#,
        phone = PHONE_NUMBER,
        email = EMAIL,
        address = html_escape(ADDRESS),
        hours = html_escape(HOURS),
        wa = html_escape(whatsapp.link(PRICE_QUOTE_MESSAGE).as_str()),
    )
}

fn render_floating_button(whatsapp: &WhatsApp) -> String {
    format!(
        r#"<a class="floating-whatsapp" href="{}" target="_blank" rel="noopener" aria-label="Chat on WhatsApp">💬</a>"#,
        html_escape(whatsapp.link(PRICE_QUOTE_MESSAGE).as_str())
    )
}

pub(crate) fn render_notice(notice: Option<Notice>) -> String {
    match notice {
        Some(Notice::Success(message)) => format!(
            r#"<div class="notice notice-success" role="status">{}</div>"#,
            html_escape(message)
        ),
        Some(Notice::Error(message)) => format!(
            r#"<div class="notice notice-error" role="alert">{}</div>"#,
            html_escape(message)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_marks_active_route() {
        let whatsapp = WhatsApp::new("2349076087744").unwrap();
        let html = render_page(Route::Shop, "<p>body</p>", &whatsapp);

        assert!(html.contains(r#"<a href="/shop" class="active">Shop</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains("https://wa.me/2349076087744?text="));
        assert!(html.contains("<title>Shop Gadgets | Gadget Haven</title>"));
    }

    #[test]
    fn test_notice_markup() {
        assert_eq!(render_notice(None), "");
        assert!(render_notice(Some(Notice::Error("Please fill in all fields")))
            .contains(r#"role="alert">Please fill in all fields<"#));
    }
}
