use super::fields::{input, submitted_panel, textarea};
use super::layout::{render_notice, ADDRESS, EMAIL, HOURS, PHONE_NUMBER};
use super::{html_escape, render_page, Route};
use crate::forms::{ContactDraft, FormSession, Phase};
use crate::whatsapp::WhatsApp;

pub fn render_contact(session: &FormSession<ContactDraft>, whatsapp: &WhatsApp) -> String {
    let form = if session.phase() == Phase::Submitted {
        submitted_panel(
            session,
            "Message Sent!",
            "We'll get back to you as soon as possible.",
            Route::Contact.path(),
            "Send Another Message",
            whatsapp,
        )
    } else {
        let draft = session.draft();
        format!(
            r#"<section class="section">
    <div class="container">
        <h2>Send a Message</h2>
        {notice}
        <form method="post" action="/contact" class="lead-form" data-form="contact">
            {name}
            {email}
            {phone}
            {message}
            <div class="form-actions">
                <button class="btn" type="submit" name="action" value="submit">Send Message</button>
                <button class="btn btn-whatsapp" type="submit" name="action" value="whatsapp" formtarget="_blank" formnovalidate>Chat on WhatsApp</button>
            </div>
        </form>
    </div>
</section>"#,
            notice = render_notice(session.notice()),
            name = input("name", "Full Name", &draft.name, "text", true),
            email = input("email", "Email", &draft.email, "email", true),
            phone = input("phone", "Phone Number", &draft.phone, "tel", true),
            message = textarea("message", "Message", &draft.message, true),
        )
    };

    let body = format!(
        r#"<section class="section soft">
    <div class="container">
        <h1>Get In Touch</h1>
        <p>Visit our store, call us, or send a message. We're here to help with all your gadget needs.</p>
        <div class="grid">
            <div class="card card-body"><h3>Phone</h3><a href="tel:{phone}">{phone}</a></div>
            <div class="card card-body"><h3>Email</h3><a href="mailto:{email}">{email}</a></div>
            <div class="card card-body"><h3>Address</h3><p>{address}</p></div>
            <div class="card card-body"><h3>Hours</h3><p>{hours}</p></div>
        </div>
    </div>
</section>
{form}"#,
        phone = PHONE_NUMBER,
        email = EMAIL,
        address = html_escape(ADDRESS),
        hours = html_escape(HOURS),
        form = form,
    );

    render_page(Route::Contact, &body, whatsapp)
}
