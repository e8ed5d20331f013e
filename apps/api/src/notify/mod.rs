// Visitor notification endpoint: formats the visitor summary and transcript
// and hands it to the mailer. Never fails the HTTP request.

pub mod format;
pub mod handlers;
