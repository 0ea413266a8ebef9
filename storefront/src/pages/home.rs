//! Landing page.

use tracing::error;

use super::{html_escape, render_page, Route};
use crate::client::Catalog;
use crate::models::{Product, Testimonial};
use crate::whatsapp::{product_quote_message, WhatsApp, PRICE_QUOTE_MESSAGE};

const FEATURED_COUNT: usize = 4;
const TESTIMONIAL_COUNT: usize = 6;

const SERVICES: &[(&str, &str, &str)] = &[
    ("Phones", "Latest & UK Used", "/shop?category=iPhones"),
    ("Laptops", "MacBooks & More", "/shop?category=Laptops"),
    ("Accessories", "AirPods, Watches", "/shop?category=Accessories"),
    ("UK Used", "Verified Quality", "/shop?category=UK+Used"),
];

const HOW_IT_WORKS: &[(&str, &str, &str)] = &[
    ("01", "Bring or Send", "Visit our store or send device details via WhatsApp"),
    ("02", "Get Quote", "Receive a fair price quote within minutes"),
    ("03", "Deal Done", "Swap, sell, or get your device repaired"),
    ("04", "Pick Up", "Collect your device or payment same day"),
];

const TRUST_POINTS: &[&str] = &[
    "Verified Devices",
    "Same Day Service",
    "Fair Pricing",
    "Quality Guaranteed",
];

/// Data shown on the landing page
#[derive(Clone, Debug, Default)]
pub struct HomeContent {
    pub testimonials: Vec<Testimonial>,
    pub featured: Vec<Product>,
}

impl HomeContent {
    /// Fetches testimonials and products concurrently. Failures leave both empty.
    pub async fn load<C: Catalog + ?Sized>(catalog: &C) -> Self {
        match tokio::try_join!(catalog.testimonials(), catalog.products(None)) {
            Ok((testimonials, products)) => Self {
                testimonials: testimonials.into_iter().take(TESTIMONIAL_COUNT).collect(),
                featured: products.into_iter().take(FEATURED_COUNT).collect(),
            },
            Err(e) => {
                error!("Error fetching data: {}", e);
                Self::default()
            }
        }
    }
}

pub fn render_home(content: &HomeContent, whatsapp: &WhatsApp) -> String {
    let services: String = SERVICES
        .iter()
        .map(|(title, desc, link)| {
            format!(
                r#"<a class="card card-body" href="{}"><h3>{}</h3><p>{}</p></a>"#,
                html_escape(link),
                html_escape(title),
                html_escape(desc)
            )
        })
        .collect();

    let steps: String = HOW_IT_WORKS
        .iter()
        .map(|(step, title, desc)| {
            format!(
                r#"<div class="card card-body"><span class="step">{}</span><h3>{}</h3><p>{}</p></div>"#,
                step,
                html_escape(title),
                html_escape(desc)
            )
        })
        .collect();

    let trust: String = TRUST_POINTS
        .iter()
        .map(|point| format!("<li>{}</li>", html_escape(point)))
        .collect();

    let body = format!(
        r#"<section class="section hero">
    <div class="container">
        <span class="badge">Abuja's Trusted Gadget Hub</span>
        <h1>Phones, Gadgets &amp; Accessories</h1>
        <p>Buy, sell, swap or repair your device at New Banex Plaza.</p>
        <a class="btn" href="/shop">Shop Now</a>
        <a class="btn btn-whatsapp" href="{quote_link}" target="_blank" rel="noopener">Get a Quote</a>
        <ul class="trust">{trust}</ul>
    </div>
</section>
<section class="section soft">
    <div class="container">
        <h2>What We Offer</h2>
        <p>From buying and selling to repairs and swaps, we've got all your gadget needs covered.</p>
        <div class="grid">{services}</div>
    </div>
</section>
<section class="section">
    <div class="container">
        <h2>How It Works</h2>
        <p>Four simple steps to buy, sell, swap, or fix your device</p>
        <div class="grid">{steps}</div>
    </div>
</section>
<section class="section soft">
    <div class="container">
        <h2>We Fix It Right</h2>
        <p>From cracked screens to battery issues, our expert technicians will have your device working like new in no time.</p>
        <a class="btn" href="/repairs">Book a Repair</a>
        <h2>Upgrade Your Device Today</h2>
        <p>Trade in your old phone and get instant value towards a new device. No hassle, fair pricing, same-day deals.</p>
        <a class="btn" href="/swap">Swap Now</a>
        <a class="btn btn-outline" href="/sell">Sell Your Device</a>
    </div>
</section>
{featured}
{testimonials}
<section class="section">
    <div class="container">
        <h2>Ready to Get Started?</h2>
        <p>Visit our store at New Banex Plaza or reach out via WhatsApp for instant quotes and support.</p>
        <a class="btn btn-whatsapp" href="{quote_link}" target="_blank" rel="noopener">Chat on WhatsApp</a>
    </div>
</section>"#,
        quote_link = html_escape(whatsapp.link(PRICE_QUOTE_MESSAGE).as_str()),
        trust = trust,
        services = services,
        steps = steps,
        featured = render_featured(&content.featured, whatsapp),
        testimonials = render_testimonials(&content.testimonials),
    );

    render_page(Route::Home, &body, whatsapp)
}

fn render_featured(products: &[Product], whatsapp: &WhatsApp) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products
        .iter()
        .map(|p| {
            let link = whatsapp.link(&product_quote_message(&p.name, &p.storage, &p.condition));
            format!(
                r#"<article class="card" data-product="{id}">
    <img src="{image}" alt="{name}" loading="lazy">
    <div class="card-body">
        <h3>{name}</h3>
        <p>{storage} · {condition}</p>
        <p><strong>{price}</strong></p>
        <a href="{link}" target="_blank" rel="noopener">Ask on WhatsApp</a>
    </div>
</article>"#,
                id = html_escape(&p.id),
                image = html_escape(&p.image),
                name = html_escape(&p.name),
                storage = html_escape(&p.storage),
                condition = html_escape(&p.condition),
                price = html_escape(&p.price),
                link = html_escape(link.as_str()),
            )
        })
        .collect();

    format!(
        r#"<section class="section featured">
    <div class="container">
        <h2>Featured Devices</h2>
        <p>Hot picks from our latest collection</p>
        <div class="grid">{}</div>
        <a class="btn btn-outline" href="/shop">View All Products</a>
    </div>
</section>"#,
        cards
    )
}

fn render_testimonials(testimonials: &[Testimonial]) -> String {
    if testimonials.is_empty() {
        return String::new();
    }

    let cards: String = testimonials
        .iter()
        .map(|t| {
            let stars = "★".repeat(usize::from(t.rating.min(5)));
            format!(
                r#"<article class="card card-body testimonial">
    <div class="rating" aria-label="{rating} out of 5">{stars}</div>
    <blockquote>"{text}"</blockquote>
    <p><strong>{name}</strong> · {device}</p>
</article>"#,
                rating = t.rating,
                stars = stars,
                text = html_escape(&t.text),
                name = html_escape(&t.name),
                device = html_escape(&t.device),
            )
        })
        .collect();

    format!(
        r#"<section class="section soft testimonials">
    <div class="container">
        <h2>What Our Customers Say</h2>
        <p>Don't just take our word for it</p>
        <div class="grid">{}</div>
    </div>
</section>"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::test_support::StubCatalog;

    #[tokio::test]
    async fn test_home_features_first_four_products() {
        let content = HomeContent::load(&StubCatalog::new()).await;
        assert_eq!(content.featured.len(), 4);
        assert_eq!(content.featured[0].id, "1");
        assert_eq!(content.testimonials.len(), 1);

        let html = render_home(&content, &WhatsApp::new("2349076087744").unwrap());
        assert!(html.contains("Featured Devices"));
        assert!(html.contains(r#"data-product="4""#));
        assert!(!html.contains(r#"data-product="5""#));
        assert!(html.contains("★★★★★"));
    }

    #[tokio::test]
    async fn test_home_shows_at_most_six_testimonials() {
        let catalog = StubCatalog {
            testimonial_count: 8,
            ..StubCatalog::new()
        };
        let content = HomeContent::load(&catalog).await;
        let ids: Vec<&str> = content.testimonials.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn test_home_renders_without_catalog() {
        let content = HomeContent::load(&StubCatalog::unavailable()).await;
        assert!(content.featured.is_empty());

        let html = render_home(&content, &WhatsApp::new("2349076087744").unwrap());
        assert!(html.contains("What We Offer"));
        assert!(!html.contains("Featured Devices"));
        assert!(!html.contains("What Our Customers Say"));
    }
}
