use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_SENDER: &str = "Resume Chatbot <onboarding@resend.dev>";
/// Bundled profile, anchored to the crate so the default works from any working directory.
pub const DEFAULT_RESUME_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/resume.json");

/// Application configuration loaded from environment variables.
/// Every credential is optional: a missing Groq key fails `/api/chat` per
/// request, a missing Resend key or recipient list disables `/api/notify`.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub notification: Option<NotificationConfig>,
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the notify path needs. Only exists when both the Resend key
/// and at least one recipient address are configured.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub api_key: String,
    pub recipients: Vec<String>,
    pub sender: String,
}

impl NotificationConfig {
    pub fn from_parts(
        api_key: Option<String>,
        recipients: Option<String>,
        sender: Option<String>,
    ) -> Option<Self> {
        let api_key = api_key?;
        let recipients = parse_recipients(&recipients?);
        if recipients.is_empty() {
            return None;
        }

        Some(Self {
            api_key,
            recipients,
            sender: sender.unwrap_or_else(|| DEFAULT_SENDER.to_string()),
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            notification: NotificationConfig::from_parts(
                optional_env("RESEND_API_KEY"),
                optional_env("NOTIFICATION_EMAIL"),
                optional_env("NOTIFICATION_FROM"),
            ),
            resume_path: optional_env("RESUME_PATH")
                .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string())
                .into(),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Splits a comma-separated address list, trimming each entry.
/// Empty entries (e.g. from a trailing comma) are dropped; duplicates and
/// address validity are left to the email service.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank values are treated the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
