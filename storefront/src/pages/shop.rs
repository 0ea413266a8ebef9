use super::fields::input;
use super::layout::render_notice;
use super::{html_escape, render_page, Route};
use crate::forms::{FormSession, Notice, QuoteDraft};
use crate::models::Product;
use crate::shop::{Listing, ShopView};
use crate::whatsapp::{product_quote_message, WhatsApp};

/// Shop page. The quote form is open when the view has a quote product.
pub fn render_shop(
    view: &ShopView,
    quote: &FormSession<QuoteDraft>,
    notice: Option<Notice>,
    whatsapp: &WhatsApp,
) -> String {
    let load_notice = render_notice(view.notice().map(Notice::Error));
    let quote_form = view
        .quote_product()
        .map(|product| render_quote_form(view, product, quote))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="section soft">
    <div class="container">
        <h1>Shop Gadgets</h1>
        <p>Browse our collection of phones, laptops, and accessories. All devices are quality-tested.</p>
        <form method="get" action="/shop" class="search">
            {category_field}
            <input type="search" name="q" value="{search}" placeholder="Search products...">
        </form>
    </div>
</section>
<section class="section">
    <div class="container">
        {notice}{load_notice}
        <nav class="tabs">{tabs}</nav>
        {listing}
    </div>
</section>
{quote_form}"#,
        category_field = view
            .query
            .category_filter()
            .map(|c| format!(
                r#"<input type="hidden" name="category" value="{}">"#,
                html_escape(c)
            ))
            .unwrap_or_default(),
        search = html_escape(&view.query.search),
        notice = render_notice(notice),
        load_notice = load_notice,
        tabs = render_tabs(view),
        listing = render_listing(view, whatsapp),
        quote_form = quote_form,
    );

    render_page(Route::Shop, &body, whatsapp)
}

fn shop_href(query: &str) -> String {
    if query.is_empty() {
        "/shop".to_string()
    } else {
        format!("/shop?{}", query)
    }
}

fn render_tabs(view: &ShopView) -> String {
    let selected = view.query.selected_category();
    view.categories()
        .iter()
        .map(|category| {
            let class = if category == selected { "tab active" } else { "tab" };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                html_escape(&shop_href(&view.query.with_category(category))),
                html_escape(category)
            )
        })
        .collect()
}

fn render_listing(view: &ShopView, whatsapp: &WhatsApp) -> String {
    if view.listing == Listing::Loading {
        return r#"<div class="loader" aria-busy="true"></div>"#.to_string();
    }

    let products = view.visible_products();
    if products.is_empty() {
        return r#"<div class="empty">
    <h3>No products found</h3>
    <p>Try adjusting your search or filter</p>
</div>"#
            .to_string();
    }

    let cards: String = products
        .iter()
        .map(|p| render_product(view, p, whatsapp))
        .collect();
    format!(r#"<div class="grid products">{}</div>"#, cards)
}

fn render_product(view: &ShopView, product: &Product, whatsapp: &WhatsApp) -> String {
    let whatsapp_link = whatsapp.link(&product_quote_message(
        &product.name,
        &product.storage,
        &product.condition,
    ));

    format!(
        r#"<article class="card" data-product="{id}">
    <img src="{image}" alt="{name}" loading="lazy">
    <div class="card-body">
        <span class="category">{category}</span>
        <h3>{name}</h3>
        <p>{storage} · {condition}</p>
        <p><strong>{price}</strong></p>
        <a class="btn" href="{quote_href}">Get Quote</a>
        <a class="btn btn-whatsapp" href="{whatsapp_link}" target="_blank" rel="noopener" aria-label="Quick WhatsApp">WhatsApp</a>
    </div>
</article>"#,
        id = html_escape(&product.id),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        storage = html_escape(&product.storage),
        condition = html_escape(&product.condition),
        price = html_escape(&product.price),
        quote_href = html_escape(&shop_href(&view.query.with_quote(Some(&product.id)))),
        whatsapp_link = html_escape(whatsapp_link.as_str()),
    )
}

fn render_quote_form(view: &ShopView, product: &Product, session: &FormSession<QuoteDraft>) -> String {
    let draft = session.draft();

    format!(
        r#"<section class="section quote" id="quote">
    <div class="container">
        <h2>Request Price Quote</h2>
        <p>{name} · {storage} · {condition}</p>
        <form method="post" action="/shop/quote" class="lead-form" data-form="quote">
            <input type="hidden" name="product_id" value="{id}">
            {category_field}{search_field}
            {customer}
            {phone}
            {email}
            {message}
            <div class="form-actions">
                <button class="btn" type="submit" name="action" value="submit">Request Quote</button>
                <button class="btn btn-whatsapp" type="submit" name="action" value="whatsapp" formtarget="_blank" formnovalidate>WhatsApp</button>
                <a class="btn btn-outline" href="{close}">Close</a>
            </div>
        </form>
    </div>
</section>"#,
        name = html_escape(&product.name),
        storage = html_escape(&product.storage),
        condition = html_escape(&product.condition),
        id = html_escape(&product.id),
        category_field = view
            .query
            .category_filter()
            .map(|c| format!(
                r#"<input type="hidden" name="category" value="{}">"#,
                html_escape(c)
            ))
            .unwrap_or_default(),
        search_field = if view.query.search.is_empty() {
            String::new()
        } else {
            format!(
                r#"<input type="hidden" name="q" value="{}">"#,
                html_escape(&view.query.search)
            )
        },
        customer = input("name", "Your Name", &draft.name, "text", true),
        phone = input("phone", "Phone Number", &draft.phone, "tel", true),
        email = input("email", "Email", &draft.email, "email", false),
        message = input("message", "Message", &draft.message, "text", false),
        close = html_escape(&shop_href(&view.query.with_quote(None))),
    )
}
