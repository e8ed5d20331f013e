use serde::{Deserialize, Serialize};

use crate::models::chat::ChatMessage;

/// Contact details a visitor typed into the chat widget. Every field may be blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitorInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyRequest {
    #[serde(default)]
    pub visitor: VisitorInfo,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Result envelope for `/api/notify`. Failures live here, never in the HTTP status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl NotifyResponse {
    pub const NOT_CONFIGURED: &'static str = "not_configured";

    pub fn sent() -> Self {
        Self {
            success: true,
            reason: None,
        }
    }

    pub fn not_configured() -> Self {
        Self::failed(Self::NOT_CONFIGURED)
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
        }
    }
}
