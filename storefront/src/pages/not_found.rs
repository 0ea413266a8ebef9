use super::{html_escape, render_page, Route};
use crate::whatsapp::WhatsApp;

pub fn render_not_found(path: &str, whatsapp: &WhatsApp) -> String {
    let body = format!(
        r#"<section class="section">
    <div class="container">
        <h1>Page Not Found</h1>
        <p>We couldn't find <code>{}</code>.</p>
        <a class="btn" href="/">Back to Home</a>
        <a class="btn btn-outline" href="/shop">Browse the Shop</a>
    </div>
</section>"#,
        html_escape(path)
    );

    render_page(Route::NotFound, &body, whatsapp)
}
