use serde::{Deserialize, Serialize};

/// Who authored a turn in the visitor-facing conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Optional visitor identity sent alongside a chat turn.
/// Accepted for schema compatibility with the front-end; not used when
/// building the prompt.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatVisitor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    #[allow(dead_code)]
    pub visitor: Option<ChatVisitor>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults_history_and_visitor() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "merhaba"}"#).unwrap();
        assert_eq!(req.message, "merhaba");
        assert!(req.history.is_empty());
        assert!(req.visitor.is_none());
    }

    #[test]
    fn test_chat_request_accepts_null_visitor() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message": "hi", "history": [{"role": "assistant", "content": "hello"}], "visitor": null}"#,
        )
        .unwrap();
        assert_eq!(req.history[0].role, ChatRole::Assistant);
        assert!(req.visitor.is_none());
    }

    #[test]
    fn test_chat_role_rejects_system() {
        let parsed = serde_json::from_str::<ChatMessage>(r#"{"role": "system", "content": "x"}"#);
        assert!(parsed.is_err());
    }
}
