//! Data carriers for the relay: caller-facing DTOs and the outbound
//! chat-completion wire bodies.

use serde::{Deserialize, Serialize};

/// Maximum number of tokens requested from the model.
pub const MAX_TOKENS: u32 = 800;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

/// Inbound request from the caller. No validation is performed; an
/// empty message is forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
}

/// Outbound reply to the caller. Constructed per call, serialized and
/// discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub success: bool,
    pub message: String,
}

/// A single role-tagged message in the completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message with the literal input text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of the outbound chat-completion call. The exact wire schema is
/// owned by the inference service; this is the subset the relay sends.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub model: String,
}

impl CompletionRequest {
    /// Build the request for a single user message against the given
    /// deployment, with the fixed token bound and temperature.
    pub fn for_user_message(user_message: &str, deployment_name: &str) -> Self {
        Self {
            messages: vec![ChatMessage::user(user_message)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            model: deployment_name.to_string(),
        }
    }
}

/// Completion response structures, mirroring the OpenAI-compatible
/// schema the endpoint speaks.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// The service may return a choice with no content at all.
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Textual content of the first choice, if the service returned any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_request_shape() {
        let request = CompletionRequest::for_user_message("hello", "Phi-4");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["model"], "Phi-4");
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_empty_message_is_forwarded() {
        let request = CompletionRequest::for_user_message("", "Phi-4");
        assert_eq!(request.messages[0].content, "");
    }

    #[test]
    fn test_response_content() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "hi there"}}]
        }))
        .unwrap();
        assert_eq!(response.into_content().as_deref(), Some("hi there"));
    }

    #[test]
    fn test_response_null_content() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(response.into_content(), None);
    }

    #[test]
    fn test_response_no_choices() {
        let response: CompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_content(), None);
    }
}
