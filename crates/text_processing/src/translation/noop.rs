//! Pass-through translator for tests and disabled configuration

use async_trait::async_trait;

use campus_assistant_core::{Language, Result, Translator};

/// Identity translator
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    fn supports_pair(&self, _from: Language, _to: Language) -> bool {
        true
    }

    fn name(&self) -> &str {
        "noop-translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identity() {
        let translator = NoopTranslator::new();
        let out = translator
            .translate("नमस्ते", Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "नमस्ते");
    }
}
