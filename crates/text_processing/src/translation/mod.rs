//! Translation module
//!
//! Three implementations behind the core `Translator` trait:
//! - `RemoteTranslator` - HTTP translation service, bounded retries
//! - `GlossTranslator` - curated offline dictionary
//! - `NoopTranslator` - pass-through
//!
//! Production wiring is remote-with-dictionary-fallback, so a network
//! failure degrades to the gloss tables instead of surfacing to the
//! student.

mod gloss;
mod noop;
mod remote;

pub use gloss::GlossTranslator;
pub use noop::NoopTranslator;
pub use remote::{FallbackTranslator, RemoteTranslator, RemoteTranslatorConfig};

use std::sync::Arc;
use std::time::Duration;

use campus_assistant_config::{TranslationProvider, TranslationSettings};
use campus_assistant_core::Translator;

/// Create translator based on config
pub fn create_translator(settings: &TranslationSettings) -> Arc<dyn Translator> {
    match settings.provider {
        TranslationProvider::Remote => {
            let config = RemoteTranslatorConfig {
                endpoint: settings.endpoint.clone(),
                timeout: Duration::from_secs(settings.timeout_secs),
                max_retries: settings.max_retries,
            };
            tracing::info!(endpoint = %settings.endpoint, "Using remote translator with gloss fallback");
            Arc::new(FallbackTranslator::new(
                Arc::new(RemoteTranslator::new(config)),
                Arc::new(GlossTranslator::new()),
            ))
        }
        TranslationProvider::Dictionary => {
            tracing::info!("Using gloss dictionary translator");
            Arc::new(GlossTranslator::new())
        }
        TranslationProvider::Disabled => Arc::new(NoopTranslator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_translator_by_provider() {
        let mut settings = TranslationSettings::default();

        settings.provider = TranslationProvider::Remote;
        assert_eq!(create_translator(&settings).name(), "fallback-translator");

        settings.provider = TranslationProvider::Dictionary;
        assert_eq!(create_translator(&settings).name(), "gloss-translator");

        settings.provider = TranslationProvider::Disabled;
        assert_eq!(create_translator(&settings).name(), "noop-translator");
    }
}
