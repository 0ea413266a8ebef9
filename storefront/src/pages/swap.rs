use super::fields::{actions, input, select, submitted_panel, textarea};
use super::layout::render_notice;
use super::{html_escape, render_page, Route};
use crate::forms::{FormSession, Phase, SwapDraft, CONDITIONS, DEVICE_TYPES};
use crate::whatsapp::WhatsApp;

const BENEFITS: &[(&str, &str)] = &[
    ("Instant Trade-In", "Get value for your old device towards a new one"),
    ("Best Value", "Fair market rates on your device"),
    ("Wide Selection", "Choose from our range of devices"),
];

pub fn render_swap(session: &FormSession<SwapDraft>, whatsapp: &WhatsApp) -> String {
    let body = if session.phase() == Phase::Submitted {
        submitted_panel(
            session,
            "Swap Request Submitted!",
            "We've received your swap request. Our team will contact you with available options.",
            Route::Swap.path(),
            "Submit Another",
            whatsapp,
        )
    } else {
        render_form(session)
    };

    render_page(Route::Swap, &body, whatsapp)
}

fn render_form(session: &FormSession<SwapDraft>) -> String {
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
        <h1>Swap Your Device</h1>
        <p>Trade in your old device and upgrade to something better. Get instant value.</p>
        <div class="grid">{benefits}</div>
    </div>
</section>
<section class="section">
    <div class="container">
        {notice}
        <form method="post" action="/swap" class="lead-form" data-form="swap">
            <h2>Your Current Device</h2>
            {device_type}
            {model}
            {condition}
            <h2>Device You Want</h2>
            {desired}
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
        device_type = select(
            "current_device_type",
            "Device Type",
            DEVICE_TYPES,
            &draft.current_device_type,
            true
        ),
        model = input("current_model", "Model", &draft.current_model, "text", true),
        condition = select(
            "current_condition",
            "Condition",
            CONDITIONS,
            &draft.current_condition,
            true
        ),
        desired = input(
            "desired_device",
            "Desired Device",
            &draft.desired_device,
            "text",
            true
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
        actions = actions("Submit Swap Request"),
    )
}
