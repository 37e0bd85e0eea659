//! Outbound transport to the inference endpoint.
//!
//! [`ChatCompleter`] is the seam between the relay's classification
//! logic and the network; [`HttpChatCompleter`] is the reqwest
//! implementation used in production.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::relay::types::{CompletionRequest, CompletionResponse};
use crate::settings::RelaySettings;

/// A process-level failure the relay must never swallow.
///
/// The relay recovers from ordinary transport errors by returning a
/// normalized string, but a condition indicating the process itself is
/// compromised is propagated unmodified.
#[derive(Error, Debug)]
#[error("fatal runtime condition: {0}")]
pub struct FatalError(pub String);

/// Errors surfaced by a [`ChatCompleter`].
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The service answered with a failure status code.
    #[error("inference request failed with status {0}")]
    Status(u16),
    /// The request failed without a usable status (connect, timeout, ...).
    #[error("inference request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered but the body could not be decoded.
    #[error("failed to decode inference response: {0}")]
    Decode(String),
    /// Irrecoverable process state; re-raised by the relay.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

/// One chat-completion exchange with the hosted model.
///
/// `Ok(None)` means the call succeeded but the response carried no
/// textual content.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, CompletionError>;
}

/// reqwest-backed completer. Holds one reusable [`Client`] and no
/// per-call mutable state, so a single instance is safe to share
/// across concurrent calls.
pub struct HttpChatCompleter {
    client: Client,
    url: String,
    api_key: String,
}

impl HttpChatCompleter {
    /// Build the completer from validated settings.
    pub fn new(settings: &RelaySettings) -> Self {
        let url = format!(
            "{}/chat/completions",
            settings.endpoint_url.trim_end_matches('/')
        );

        Self {
            client: Client::new(),
            url,
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl ChatCompleter for HttpChatCompleter {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        debug!(url = %self.url, model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        Ok(completion.into_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let settings = RelaySettings::new(
            "https://example.inference.test/",
            "secret",
            None,
        )
        .unwrap();
        let completer = HttpChatCompleter::new(&settings);
        assert_eq!(completer.url, "https://example.inference.test/chat/completions");
    }

    #[test]
    fn test_status_error_display() {
        let err = CompletionError::Status(429);
        assert_eq!(err.to_string(), "inference request failed with status 429");
    }
}
