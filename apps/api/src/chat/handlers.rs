//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use tracing::error;

use crate::errors::AppError;
use crate::llm_client::{CompletionMessage, CompletionRequest};
use crate::models::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::state::AppState;

/// Returned when the model produces no usable text.
pub const FALLBACK_REPLY: &str = "Üzgünüm, yanıt oluşturamadım.";
/// Returned when the upstream failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Failed to generate response";
const MISSING_KEY: &str = "Groq API key is not configured";

/// Orders the outbound conversation: system prompt, prior turns, new message.
pub fn build_messages(
    system_prompt: &str,
    history: &[ChatMessage],
    message: &str,
) -> Vec<CompletionMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(CompletionMessage::system(system_prompt));
    messages.extend(history.iter().map(CompletionMessage::from));
    messages.push(CompletionMessage::user(message));
    messages
}

/// POST /api/chat
///
/// Sends the visitor's message plus history to the completion service and
/// returns the first reply. Fails with 500 when the key is missing or the
/// upstream call fails.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let api_key = state
        .config
        .groq_api_key
        .as_deref()
        .ok_or_else(|| AppError::Configuration(MISSING_KEY.to_string()))?;

    let completion_request = CompletionRequest::new(build_messages(
        &state.system_prompt,
        &request.history,
        &request.message,
    ));

    let completion = state
        .llm
        .complete(api_key, &completion_request)
        .await
        .map_err(|e| {
            error!("Groq API error: {e}");
            AppError::Upstream(e.message().unwrap_or_else(|| FALLBACK_ERROR.to_string()))
        })?;

    let reply = completion.text().unwrap_or(FALLBACK_REPLY).to_string();

    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;
    use crate::models::chat::ChatRole;

    fn turn(role: ChatRole, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_build_messages_orders_system_history_user() {
        let history = vec![
            turn(ChatRole::User, "hi"),
            turn(ChatRole::Assistant, "hello"),
        ];
        let messages = build_messages("PROMPT", &history, "bye");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], CompletionMessage::system("PROMPT"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "hi");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "hello");
        assert_eq!(messages[3], CompletionMessage::user("bye"));
    }

    #[test]
    fn test_build_messages_empty_history() {
        let messages = build_messages("PROMPT", &[], "merhaba");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1], CompletionMessage::user("merhaba"));
    }

    #[test]
    fn test_build_messages_length_tracks_history() {
        let history: Vec<_> = (0..7)
            .map(|i| {
                let role = if i % 2 == 0 { ChatRole::User } else { ChatRole::Assistant };
                turn(role, &i.to_string())
            })
            .collect();
        let messages = build_messages("PROMPT", &history, "son");

        assert_eq!(messages.len(), history.len() + 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages.last(), Some(&CompletionMessage::user("son")));
        for (sent, original) in messages[1..=history.len()].iter().zip(&history) {
            assert_eq!(sent.role, Role::from(original.role));
            assert_eq!(sent.content, original.content);
        }
    }
}
