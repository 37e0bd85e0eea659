//! Relay configuration, validated once at startup.
//!
//! The relay refuses to exist without a usable endpoint and credential;
//! a missing deployment name falls back to [`DEFAULT_DEPLOYMENT_NAME`].

use std::env;
use thiserror::Error;

/// Deployment used when the configuration does not name one.
pub const DEFAULT_DEPLOYMENT_NAME: &str = "Phi-4";

/// Environment variable holding the inference endpoint URL.
pub const ENV_ENDPOINT_URL: &str = "FOUNDRY_ENDPOINT_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FOUNDRY_API_KEY";
/// Environment variable holding the deployment name (optional).
pub const ENV_DEPLOYMENT_NAME: &str = "FOUNDRY_DEPLOYMENT_NAME";

/// Configuration errors. All of these are fatal: no relay is created.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("inference endpoint URL is not configured (set {ENV_ENDPOINT_URL})")]
    MissingEndpoint,
    #[error("inference API key is not configured (set {ENV_API_KEY})")]
    MissingApiKey,
}

/// Immutable settings for the relay, read once at construction time.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Base URL of the hosted inference endpoint.
    pub endpoint_url: String,
    /// API key sent with every outbound request.
    pub api_key: String,
    /// Name of the hosted model deployment to invoke.
    pub deployment_name: String,
}

impl RelaySettings {
    /// Validate and build settings from the three raw values.
    ///
    /// Fails if the endpoint or API key is missing or empty. The
    /// deployment name is never required; absent or empty values fall
    /// back to [`DEFAULT_DEPLOYMENT_NAME`].
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
        deployment_name: Option<String>,
    ) -> Result<Self, SettingsError> {
        let endpoint_url = endpoint_url.into();
        if endpoint_url.trim().is_empty() {
            return Err(SettingsError::MissingEndpoint);
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }

        let deployment_name = deployment_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEPLOYMENT_NAME.to_string());

        Ok(Self {
            endpoint_url,
            api_key,
            deployment_name,
        })
    }

    /// Build settings from environment variables.
    ///
    /// Reads `FOUNDRY_ENDPOINT_URL`, `FOUNDRY_API_KEY` and the optional
    /// `FOUNDRY_DEPLOYMENT_NAME`.
    pub fn from_env() -> Result<Self, SettingsError> {
        let endpoint_url = env::var(ENV_ENDPOINT_URL).unwrap_or_default();
        let api_key = env::var(ENV_API_KEY).unwrap_or_default();
        let deployment_name = env::var(ENV_DEPLOYMENT_NAME).ok();

        Self::new(endpoint_url, api_key, deployment_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_deployment() {
        let settings =
            RelaySettings::new("https://example.inference.test", "secret", None).unwrap();
        assert_eq!(settings.deployment_name, DEFAULT_DEPLOYMENT_NAME);
    }

    #[test]
    fn test_settings_empty_deployment_falls_back() {
        let settings = RelaySettings::new(
            "https://example.inference.test",
            "secret",
            Some("  ".to_string()),
        )
        .unwrap();
        assert_eq!(settings.deployment_name, DEFAULT_DEPLOYMENT_NAME);
    }

    #[test]
    fn test_settings_custom_deployment() {
        let settings = RelaySettings::new(
            "https://example.inference.test",
            "secret",
            Some("Phi-4-mini".to_string()),
        )
        .unwrap();
        assert_eq!(settings.deployment_name, "Phi-4-mini");
    }

    #[test]
    fn test_settings_missing_endpoint() {
        let err = RelaySettings::new("", "secret", None).unwrap_err();
        assert!(matches!(err, SettingsError::MissingEndpoint));
    }

    #[test]
    fn test_settings_missing_api_key() {
        let err = RelaySettings::new("https://example.inference.test", "", None).unwrap_err();
        assert!(matches!(err, SettingsError::MissingApiKey));
    }
}
