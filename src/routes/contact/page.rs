use std::fmt::Write;

use htmlescape::encode_minimal;

use crate::domain::{ContactFields, SubmissionId, SubmissionOutcome};

/// What the page shows above the form.
pub enum Notice {
    Busy,
    Acknowledged(SubmissionId),
    Error(String),
}

impl From<SubmissionOutcome> for Notice {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Pending => Notice::Busy,
            SubmissionOutcome::Succeeded(id) => Notice::Acknowledged(id),
            SubmissionOutcome::Failed(message) => Notice::Error(message),
        }
    }
}

pub fn render_contact_page(fields: &ContactFields, notice: Option<&Notice>) -> String {
    let mut notice_html = String::new();
    match notice {
        Some(Notice::Busy) => {
            writeln!(notice_html, r#"<p class="notice busy">Sending your message...</p>"#)
        }
        Some(Notice::Acknowledged(id)) => writeln!(
            notice_html,
            r#"<p class="notice success">Thanks! Your message has been sent. Reference ID: {}</p>"#,
            encode_minimal(id.as_ref())
        ),
        Some(Notice::Error(message)) => writeln!(
            notice_html,
            r#"<p class="notice error">{}</p>"#,
            encode_minimal(message)
        ),
        None => Ok(()),
    }
    .expect("Writing to a String cannot fail");

    let disabled = if matches!(notice, Some(Notice::Busy)) {
        " disabled"
    } else {
        ""
    };
    let name = encode_minimal(&fields.name);
    let email = encode_minimal(&fields.email);
    let subject = encode_minimal(&fields.subject);
    let phone = encode_minimal(&fields.phone);
    let message = encode_minimal(&fields.message);
    let script = include_str!("./disable-submit-button.js");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Contact</title>
</head>
<body>
    <h1>Contact</h1>
    <p>Let's connect and build something cool</p>
    {notice_html}
    <form id="contactForm" action="/contact" method="post">
        <label>Name
            <input type="text" name="name" value="{name}" required />
        </label>
        <br />
        <label>Email
            <input type="email" name="email" value="{email}" required />
        </label>
        <br />
        <label>Subject
            <input type="text" name="subject" value="{subject}" />
        </label>
        <br />
        <label>Phone
            <input type="tel" name="phone" value="{phone}" />
        </label>
        <br />
        <label>Message
            <textarea name="message" rows="8" cols="50" required>{message}</textarea>
        </label>
        <br />
        <button id="submitButton" type="submit"{disabled}>Send message</button>
    </form>
    <script>
    {script}
    </script>
</body>
</html>
"#
    )
}
