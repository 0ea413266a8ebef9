use super::fields::{actions, input, select, submitted_panel, textarea};
use super::layout::render_notice;
use super::{html_escape, render_page, Route};
use crate::forms::{FormSession, Phase, RepairDraft, DEVICE_TYPES};
use crate::models::RepairService;
use crate::whatsapp::WhatsApp;

/// Repairs page. `selected` is the id of the service picked via `?service=`.
pub fn render_repairs(
    services: &[RepairService],
    selected: Option<&str>,
    session: &FormSession<RepairDraft>,
    whatsapp: &WhatsApp,
) -> String {
    let body = if session.phase() == Phase::Submitted {
        submitted_panel(
            session,
            "Booking Confirmed!",
            "We've received your repair booking. Our team will contact you to confirm the appointment.",
            Route::Repairs.path(),
            "Book Another",
            whatsapp,
        )
    } else {
        format!(
            r#"<section class="section soft">
    <div class="container">
        <h1>We Fix It Right</h1>
        <p>Professional repairs for all brands. Screen, battery, charging port, software issues and more.</p>
    </div>
</section>
<section class="section">
    <div class="container">
        <h2>Our Repair Services</h2>
        <p>Select a service to book or contact us for custom repairs</p>
        <div class="grid">{services}</div>
    </div>
</section>
{form}"#,
            services = render_services(services, selected),
            form = render_form(session),
        )
    };

    render_page(Route::Repairs, &body, whatsapp)
}

fn render_services(services: &[RepairService], selected: Option<&str>) -> String {
    services
        .iter()
        .map(|service| {
            let active = if selected == Some(service.id.as_str()) {
                " active"
            } else {
                ""
            };
            format!(
                r#"<a class="card card-body service{active}" href="/repairs?service={id}#book" data-service="{id}">
    <span class="{icon_class}" aria-hidden="true">{glyph}</span>
    <h3>{name}</h3>
    <p>{description}</p>
    <p><strong>From {price}</strong></p>
</a>"#,
                active = active,
                id = html_escape(&service.id),
                icon_class = service.icon.css_class(),
                glyph = service.icon.glyph(),
                name = html_escape(&service.name),
                description = html_escape(&service.description),
                price = html_escape(&service.price_from),
            )
        })
        .collect()
}

fn render_form(session: &FormSession<RepairDraft>) -> String {
    let draft = session.draft();

    format!(
        r#"<section class="section" id="book">
    <div class="container">
        <h2>Book a Repair</h2>
        {notice}
        <form method="post" action="/repairs" class="lead-form" data-form="repair">
            {device_type}
            {device_model}
            {issue}
            {issue_description}
            {preferred_date}
            {name}
            {phone}
            {email}
            {actions}
        </form>
    </div>
</section>"#,
        notice = render_notice(session.notice()),
        device_type = select("device_type", "Device Type", DEVICE_TYPES, &draft.device_type, true),
        device_model = input("device_model", "Device Model", &draft.device_model, "text", true),
        issue = input("issue", "Issue", &draft.issue, "text", true),
        issue_description = textarea(
            "issue_description",
            "Describe the Issue",
            &draft.issue_description,
            false
        ),
        preferred_date = input(
            "preferred_date",
            "Preferred Date",
            &draft.preferred_date,
            "date",
            false
        ),
        name = input("name", "Full Name", &draft.name, "text", true),
        phone = input("phone", "Phone Number", &draft.phone, "tel", true),
        email = input("email", "Email", &draft.email, "email", false),
        actions = actions("Book Repair"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::LeadForm;
    use crate::models::RepairIcon;

    #[test]
    fn test_selected_service_is_highlighted_and_prefilled() {
        let services = vec![RepairService {
            id: "3".to_string(),
            name: "Charging Port Repair".to_string(),
            description: "Phone not charging properly? We can help.".to_string(),
            price_from: "₦10,000".to_string(),
            icon: RepairIcon::Charging,
        }];
        let mut draft = RepairDraft::default();
        draft.apply("issue", services[0].name.clone()).unwrap();

        let html = render_repairs(
            &services,
            Some("3"),
            &FormSession::editing(draft),
            &WhatsApp::new("2349076087744").unwrap(),
        );

        assert!(html.contains("service active"));
        assert!(html.contains(r#"class="icon-zap""#));
        assert!(html.contains(r#"name="issue" value="Charging Port Repair""#));
    }

    #[test]
    fn test_submitted_booking_offers_confirmation_link() {
        let whatsapp = WhatsApp::new("2349076087744").unwrap();
        let html = render_repairs(
            &[],
            None,
            &FormSession::submitted(RepairDraft::default()),
            &whatsapp,
        );

        let message = RepairDraft::FOLLOW_UP_MESSAGE.unwrap();
        assert_eq!(message, "Hi, I just booked a repair and would like to confirm.");
        assert!(html.contains(&html_escape(whatsapp.link(message).as_str())));
    }
}
