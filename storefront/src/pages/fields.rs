//! Form controls shared by the lead forms.

use serde::Serialize;

use super::html_escape;
use super::layout::render_notice;
use crate::forms::{FormSession, LeadForm};
use crate::whatsapp::WhatsApp;

fn label(text: &str, required: bool) -> String {
    if required {
        format!("{} *", html_escape(text))
    } else {
        html_escape(text)
    }
}

pub(crate) fn input(name: &str, text: &str, value: &str, kind: &str, required: bool) -> String {
    format!(
        r#"<label class="field">{label}<input type="{kind}" name="{name}" value="{value}"{req}></label>"#,
        label = label(text, required),
        kind = kind,
        name = name,
        value = html_escape(value),
        req = if required { " required" } else { "" },
    )
}

pub(crate) fn textarea(name: &str, text: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label class="field">{label}<textarea name="{name}" rows="4"{req}>{value}</textarea></label>"#,
        label = label(text, required),
        name = name,
        value = html_escape(value),
        req = if required { " required" } else { "" },
    )
}

pub(crate) fn select(name: &str, text: &str, options: &[&str], selected: &str, required: bool) -> String {
    let options: String = options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                html_escape(option),
                if *option == selected { " selected" } else { "" }
            )
        })
        .collect();

    format!(
        r#"<label class="field">{label}<select name="{name}"{req}><option value="">Select</option>{options}</select></label>"#,
        label = label(text, required),
        name = name,
        req = if required { " required" } else { "" },
        options = options,
    )
}

/// Submit and WhatsApp buttons of a lead form
pub(crate) fn actions(submit_label: &str) -> String {
    format!(
        r#"<div class="form-actions">
    <button class="btn" type="submit" name="action" value="submit">{}</button>
    <button class="btn btn-whatsapp" type="submit" name="action" value="whatsapp" formtarget="_blank" formnovalidate>Send via WhatsApp</button>
</div>"#,
        html_escape(submit_label)
    )
}

/// The draft as hidden inputs, so "submit another" can carry it back
pub(crate) fn hidden_fields<F: Serialize>(draft: &F) -> String {
    let Ok(serde_json::Value::Object(map)) = serde_json::to_value(draft) else {
        return String::new();
    };

    map.iter()
        .filter_map(|(name, value)| value.as_str().map(|v| (name, v)))
        .map(|(name, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                html_escape(name),
                html_escape(value)
            )
        })
        .collect()
}

/// Confirmation shown once a lead is stored
pub(crate) fn submitted_panel<F: LeadForm>(
    session: &FormSession<F>,
    heading: &str,
    text: &str,
    action_path: &str,
    another_label: &str,
    whatsapp: &WhatsApp,
) -> String {
    let follow_up = F::FOLLOW_UP_MESSAGE
        .map(|message| {
            format!(
                r#"<a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener">Follow up on WhatsApp</a>"#,
                html_escape(whatsapp.link(message).as_str())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="section">
    <div class="container submitted">
        {notice}
        <h1>{heading}</h1>
        <p>{text}</p>
        <form method="post" action="{action_path}">
            {hidden}
            <button class="btn btn-outline" type="submit" name="action" value="another">{another}</button>
            {follow_up}
        </form>
    </div>
</section>"#,
        notice = render_notice(session.notice()),
        heading = html_escape(heading),
        text = html_escape(text),
        action_path = action_path,
        hidden = hidden_fields(session.draft()),
        another = html_escape(another_label),
        follow_up = follow_up,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SellDraft;

    #[test]
    fn test_select_marks_current_value() {
        let html = select("condition", "Condition", &["Good", "Fair"], "Fair", true);
        assert!(html.contains(r#"<option value="Fair" selected>Fair</option>"#));
        assert!(html.contains(r#"<option value="Good">Good</option>"#));
        assert!(html.contains(" required>"));
    }

    #[test]
    fn test_input_escapes_value() {
        let html = input("model", "Model", r#"13 "Pro""#, "text", false);
        assert!(html.contains(r#"value="13 &quot;Pro&quot;""#));
    }

    #[test]
    fn test_hidden_fields_carry_draft() {
        let draft = SellDraft {
            model: "Pixel 7".to_string(),
            ..Default::default()
        };
        let html = hidden_fields(&draft);
        assert!(html.contains(r#"<input type="hidden" name="model" value="Pixel 7">"#));
        assert!(html.contains(r#"name="device_type" value="""#));
    }
}
