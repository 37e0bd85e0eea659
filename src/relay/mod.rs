//! The message relay: forwards a user message to the hosted model and
//! normalizes the outcome.
//!
//! Every ordinary failure is converted into a caller-facing error
//! string; only fatal runtime conditions propagate as errors.

mod transport;
mod types;

use std::sync::Arc;

use tracing::{error, info, warn};

pub use transport::{ChatCompleter, CompletionError, FatalError, HttpChatCompleter};
pub use types::{
    ChatMessage, ChatMessageRequest, ChatMessageResponse, CompletionRequest, CompletionResponse,
    MAX_TOKENS, TEMPERATURE,
};

use crate::settings::RelaySettings;

/// Returned when the service answered but carried no content.
pub const NO_RESPONSE_MESSAGE: &str = "Error: No response from AI service.";

/// Returned on any failure that is neither status-coded nor fatal.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Error: An unexpected error occurred. Please try again.";

/// Forwards user messages to a hosted chat-completion deployment.
///
/// The relay's only state is its immutable settings and a reusable
/// completer, so one shared instance is safe to call concurrently.
pub struct MessageRelay {
    settings: RelaySettings,
    completer: Arc<dyn ChatCompleter>,
}

impl MessageRelay {
    /// Create a relay talking HTTP to the configured endpoint.
    pub fn new(settings: RelaySettings) -> Self {
        let completer = Arc::new(HttpChatCompleter::new(&settings));
        Self {
            settings,
            completer,
        }
    }

    /// Create a relay with a custom transport.
    pub fn with_completer(settings: RelaySettings, completer: Arc<dyn ChatCompleter>) -> Self {
        Self {
            settings,
            completer,
        }
    }

    /// Deployment this relay targets.
    pub fn deployment_name(&self) -> &str {
        &self.settings.deployment_name
    }

    /// Send a user message and return the model's reply, or a
    /// normalized error string.
    ///
    /// Only a fatal runtime condition surfaces as `Err`; every other
    /// failure is recovered locally into the returned string.
    pub async fn send(&self, user_message: &str) -> Result<String, FatalError> {
        let (_, message) = self.dispatch(user_message).await?;
        Ok(message)
    }

    /// Inbound operation: wraps [`send`](Self::send) in the
    /// caller-facing DTOs. `success` is true only when the model's
    /// reply came back verbatim.
    pub async fn send_message(
        &self,
        request: ChatMessageRequest,
    ) -> Result<ChatMessageResponse, FatalError> {
        let (success, message) = self.dispatch(&request.message).await?;
        Ok(ChatMessageResponse { success, message })
    }

    async fn dispatch(&self, user_message: &str) -> Result<(bool, String), FatalError> {
        info!(
            deployment = %self.settings.deployment_name,
            "sending message to inference deployment"
        );

        let request =
            CompletionRequest::for_user_message(user_message, &self.settings.deployment_name);

        match self.completer.complete(&request).await {
            Ok(Some(content)) => Ok((true, content)),
            Ok(None) => {
                warn!(
                    deployment = %self.settings.deployment_name,
                    "no content returned from inference endpoint"
                );
                Ok((false, NO_RESPONSE_MESSAGE.to_string()))
            }
            Err(CompletionError::Status(code)) => {
                error!(status = code, "inference request failed");
                Ok((
                    false,
                    format!("Error: Unable to get response from AI service. Status: {code}"),
                ))
            }
            Err(CompletionError::Fatal(fatal)) => Err(fatal),
            Err(e) => {
                error!(error = %e, "unexpected error while communicating with inference endpoint");
                Ok((false, UNEXPECTED_ERROR_MESSAGE.to_string()))
            }
        }
    }
}
