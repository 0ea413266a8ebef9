use super::fields::{actions, input, select, submitted_panel, textarea};
use super::layout::render_notice;
use super::{html_escape, render_page, Route};
use crate::forms::{
    FormSession, Phase, SellDraft, BATTERY_HEALTH_OPTIONS, CONDITIONS, DEVICE_TYPES,
    STORAGE_OPTIONS,
};
use crate::whatsapp::WhatsApp;

const BENEFITS: &[(&str, &str)] = &[
    ("Fair Pricing", "We offer competitive market rates"),
    ("Quick Process", "Get a quote within minutes"),
    ("Safe & Secure", "Your data is wiped professionally"),
    ("Same Day Payment", "Cash or transfer on the spot"),
];

pub fn render_sell(session: &FormSession<SellDraft>, whatsapp: &WhatsApp) -> String {
    let body = if session.phase() == Phase::Submitted {
        submitted_panel(
            session,
            "Request Submitted!",
            "We've received your sell request. Our team will review and contact you shortly with a quote.",
            Route::Sell.path(),
            "Submit Another",
            whatsapp,
        )
    } else {
        render_form(session)
    };

    render_page(Route::Sell, &body, whatsapp)
}

fn render_form(session: &FormSession<SellDraft>) -> String {
    let draft = session.draft();
    let benefits: String = BENEFITS
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card card-body"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(title),
                html_escape(desc)
            )
        })
        .collect();

    format!(
        r#"<section class="section soft">
    <div class="container">
        <h1>Sell Your Device</h1>
        <p>Get a fast quote and same-day payment. We buy all brands and conditions.</p>
        <div class="grid">{benefits}</div>
    </div>
</section>
<section class="section">
    <div class="container">
        {notice}
        <form method="post" action="/sell" class="lead-form" data-form="sell">
            <h2>Device Details</h2>
            {device_type}
            {model}
            {storage}
            {condition}
            {battery_health}
            <h2>Your Details</h2>
            {name}
            {phone}
            {email}
            {additional_info}
            {actions}
        </form>
    </div>
</section>"#,
        benefits = benefits,
        notice = render_notice(session.notice()),
        device_type = select("device_type", "Device Type", DEVICE_TYPES, &draft.device_type, true),
        model = input("model", "Model", &draft.model, "text", true),
        storage = select("storage", "Storage", STORAGE_OPTIONS, &draft.storage, false),
        condition = select("condition", "Condition", CONDITIONS, &draft.condition, true),
        battery_health = select(
            "battery_health",
            "Battery Health",
            BATTERY_HEALTH_OPTIONS,
            &draft.battery_health,
            false
        ),
        name = input("name", "Full Name", &draft.name, "text", true),
        phone = input("phone", "Phone Number", &draft.phone, "tel", true),
        email = input("email", "Email", &draft.email, "email", false),
        additional_info = textarea(
            "additional_info",
            "Additional Information",
            &draft.additional_info,
            false
        ),
        actions = actions("Submit Request"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{LeadForm, Notice};

    #[test]
    fn test_form_keeps_draft_and_notice() {
        let mut draft = SellDraft::default();
        draft.apply("model", "iPhone 13 <Pro>".to_string()).unwrap();
        let mut session = FormSession::editing(draft);
        assert!(session.begin_submit().is_none());
        assert_eq!(
            session.notice(),
            Some(Notice::Error("Please fill in all required fields"))
        );

        let html = render_sell(&session, &WhatsApp::new("2349076087744").unwrap());
        assert!(html.contains(r#"value="iPhone 13 &lt;Pro&gt;""#));
        assert!(html.contains("Please fill in all required fields"));
        assert!(html.contains(r#"value="whatsapp""#));
    }

    #[test]
    fn test_submitted_view_offers_follow_up() {
        let session = FormSession::submitted(SellDraft::default());
        let html = render_sell(&session, &WhatsApp::new("2349076087744").unwrap());

        assert!(html.contains("Request Submitted!"));
        assert!(html.contains(r#"value="another""#));
        assert!(html.contains("Follow up on WhatsApp"));
        assert!(!html.contains(r#"data-form="sell""#));
    }
}
