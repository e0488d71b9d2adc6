use actix_web::{HttpResponse, Responder};

/// GET /api/site/contact — the contact section's `mailto:` link, assembled
/// from environment configuration so the address never lives in the
/// client bundle.
pub async fn contact() -> impl Responder {
    let email = std::env::var("CONTACT_EMAIL").unwrap_or_default();
    let subject = std::env::var("CONTACT_SUBJECT").unwrap_or_default();
    let body = std::env::var("CONTACT_BODY").unwrap_or_default();

    HttpResponse::Ok().json(serde_json::json!({
        "email": email,
        "mailto": mailto_link(&email, &subject, &body),
    }))
}

/// Build `mailto:addr?subject=...&body=...` with percent-encoded
/// parameters. Form serialization writes spaces as '+', which mail clients
/// do not unescape, so they are rewritten to %20.
pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    let mut link = format!("mailto:{email}");
    let mut params = Vec::new();

    if !subject.is_empty() {
        params.push(format!("subject={}", encode_component(subject)));
    }
    if !body.is_empty() {
        params.push(format!("body={}", encode_component(body)));
    }
    if !params.is_empty() {
        link.push('?');
        link.push_str(&params.join("&"));
    }

    link
}

fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
