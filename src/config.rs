use crate::client::{Client, DEFAULT_BASE_URL, USER_AGENT};
use crate::errors::ClearbitError;
use std::time::Duration;

/// Settings for building a [`Client`] with its own transport.
///
/// The library never reads the environment; host applications fill this in
/// from whatever configuration source they use.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request deadline applied by the transport. `None` means no limit.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the key is present and the base URL is HTTP(S).
    pub fn validate(&self) -> Result<(), ClearbitError> {
        if self.api_key.trim().is_empty() {
            return Err(ClearbitError::Config("API key cannot be empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClearbitError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ClearbitError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Validates the settings and builds a [`Client`] with a dedicated transport.
    pub fn build(self) -> Result<Client, ClearbitError> {
        self.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            ClearbitError::Config(format!("Failed to create HTTP client: {}", e))
        })?;

        tracing::debug!("Clearbit client configured for {}", self.base_url);

        Ok(Client::new(self.api_key, Some(http))
            .with_base_url(self.base_url)
            .with_user_agent(self.user_agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_production_host() {
        let config = ClientConfig::new("sk_test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, USER_AGENT);
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = ClientConfig::new("   ").validate().unwrap_err();
        assert!(matches!(err, ClearbitError::Config(_)));
    }

    #[test]
    fn test_base_url_scheme_required() {
        let config = ClientConfig::new("sk_test").with_base_url("person.clearbit.com");
        assert!(matches!(config.validate(), Err(ClearbitError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig::new("sk_test").with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(ClearbitError::Config(_))));
    }

    #[test]
    fn test_build_applies_settings() {
        let client = ClientConfig::new("sk_test")
            .with_base_url("http://127.0.0.1:9999/")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("my-app/1.0")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(client.user_agent(), "my-app/1.0");
    }
}
