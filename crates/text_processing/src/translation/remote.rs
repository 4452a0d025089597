//! Remote translation client
//!
//! HTTP/JSON client for the translation sidecar. API format:
//! POST {endpoint}/translate
//! { "text": "...", "from": "en", "to": "hi" }
//! Response: { "translation": "..." }
//!
//! Attempts are bounded by the configured timeout and retry count so a
//! slow service cannot stall a reply; callers wrap this in
//! `FallbackTranslator` to degrade to the gloss dictionary.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use campus_assistant_core::{Error, Language, Result, Translator};

/// Remote translator configuration
#[derive(Debug, Clone)]
pub struct RemoteTranslatorConfig {
    /// Endpoint URL (http://host:port)
    pub endpoint: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
    /// Retries after the first failed attempt
    pub max_retries: u32,
}

impl Default for RemoteTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8089".to_string(),
            timeout: Duration::from_secs(5),
            max_retries: 1,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translation: String,
}

/// Translation service client using HTTP/JSON
pub struct RemoteTranslator {
    config: RemoteTranslatorConfig,
    client: reqwest::Client,
}

impl RemoteTranslator {
    /// Create a new remote translator
    pub fn new(config: RemoteTranslatorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    async fn call_service(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let url = format!("{}/translate", self.config.endpoint);
        let request = TranslateRequest {
            text,
            from: from.code(),
            to: to.code(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Translation(e.to_string()))?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?;

        Ok(body.translation)
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        // Queries are processed in English already; translating to
        // English is the identity for every translator
        if from == to || to == Language::English || text.is_empty() {
            return Ok(text.to_string());
        }

        let attempts = 1 + self.config.max_retries;
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.call_service(text, from, to).await {
                Ok(translation) => return Ok(translation),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        attempt,
                        attempts,
                        endpoint = %self.config.endpoint,
                        "Remote translation attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::Translation("remote translation failed".to_string())))
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        from != to
    }

    fn name(&self) -> &str {
        "remote-translator"
    }
}

/// Fallback translator that tries primary first, then falls back
pub struct FallbackTranslator {
    primary: Arc<dyn Translator>,
    fallback: Arc<dyn Translator>,
}

impl FallbackTranslator {
    /// Create a new fallback translator
    pub fn new(primary: Arc<dyn Translator>, fallback: Arc<dyn Translator>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Translator for FallbackTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        match self.primary.translate(text, from, to).await {
            Ok(translation) => Ok(translation),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    "Primary translator failed, using fallback"
                );
                self.fallback.translate(text, from, to).await
            }
        }
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        self.primary.supports_pair(from, to) || self.fallback.supports_pair(from, to)
    }

    fn name(&self) -> &str {
        "fallback-translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::GlossTranslator;

    #[tokio::test]
    async fn test_same_language_passthrough() {
        let translator = RemoteTranslator::new(RemoteTranslatorConfig::default());
        let out = translator
            .translate("Hello", Language::English, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "Hello");
    }

    #[tokio::test]
    async fn test_to_english_is_identity_without_network() {
        // Endpoint is unreachable on purpose; the identity contract
        // means no request is ever made
        let config = RemoteTranslatorConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
            max_retries: 0,
        };
        let translator = RemoteTranslator::new(config);
        let out = translator
            .translate("नमस्ते", Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "नमस्ते");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        let config = RemoteTranslatorConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
            max_retries: 0,
        };
        let translator = RemoteTranslator::new(config);
        let result = translator
            .translate("Hello", Language::English, Language::Hindi)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fallback_recovers_from_remote_failure() {
        let config = RemoteTranslatorConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
            max_retries: 0,
        };
        let translator = FallbackTranslator::new(
            Arc::new(RemoteTranslator::new(config)),
            Arc::new(GlossTranslator::new()),
        );

        let out = translator
            .translate(
                "Sorry, I did not understand that",
                Language::English,
                Language::Hindi,
            )
            .await
            .unwrap();
        assert_eq!(out, "क्षमा करें, मैं समझ नहीं पाया");
    }
}
