//! Plain-text rendering of the visitor notification email.

use crate::models::chat::{ChatMessage, ChatRole};
use crate::models::notify::VisitorInfo;

pub const PLACEHOLDER: &str = "Belirtilmedi";
const ANONYMOUS: &str = "Anonim";
const VISITOR_MARKER: &str = "👤 Ziyaretçi";
const BOT_MARKER: &str = "🤖 Bot";

/// One line per turn, blank line between turns, original order.
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let marker = match m.role {
                ChatRole::User => VISITOR_MARKER,
                ChatRole::Assistant => BOT_MARKER,
            };
            format!("{marker}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_email_body(visitor: &VisitorInfo, messages: &[ChatMessage]) -> String {
    format!(
        "# 🎉 Yeni Özgeçmiş Ziyaretçisi!

## Ziyaretçi Bilgileri
- **İsim:** {name}
- **E-posta:** {email}
- **Telefon:** {phone}
- **Şirket:** {company}
- **Pozisyon:** {position}

## Sohbet Geçmişi
{transcript}

---
*Bu email resume-chatbot tarafından otomatik gönderilmiştir.*",
        name = or_placeholder(&visitor.name, PLACEHOLDER),
        email = or_placeholder(&visitor.email, PLACEHOLDER),
        phone = or_placeholder(&visitor.phone, PLACEHOLDER),
        company = or_placeholder(&visitor.company, PLACEHOLDER),
        position = or_placeholder(&visitor.position, PLACEHOLDER),
        transcript = render_transcript(messages),
    )
    .trim()
    .to_string()
}

/// `🎯 Yeni Ziyaretçi: <name> (<company>)`, company part only when present.
pub fn build_subject(visitor: &VisitorInfo) -> String {
    let name = or_placeholder(&visitor.name, ANONYMOUS);
    match non_blank(&visitor.company) {
        Some(company) => format!("🎯 Yeni Ziyaretçi: {name} ({company})"),
        None => format!("🎯 Yeni Ziyaretçi: {name}"),
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    non_blank(value).unwrap_or(placeholder)
}
