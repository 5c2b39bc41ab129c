use crate::config::{CaseFormat, Config, ServiceName};
use crate::error::{ProviderFailure, Result, TranslateError};
use crate::text::{format_case, is_mixed_case, normalize_for_translation, Language, LanguagePair};
use crate::translate::{BaiduTranslator, GoogleTranslator, MyMemoryTranslator, Translator};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Final text, case-formatted when the target is English.
    pub text: String,
    /// Text as it was sent to the provider.
    pub source_text: String,
    pub languages: LanguagePair,
    pub provider: ServiceName,
}

/// Tries translation providers one at a time, in priority order.
pub struct TranslationOrchestrator {
    providers: Vec<Box<dyn Translator>>,
    case_format: CaseFormat,
}

impl TranslationOrchestrator {
    /// Create an orchestrator over providers already in attempt order.
    pub fn new(providers: Vec<Box<dyn Translator>>, case_format: CaseFormat) -> Self {
        Self {
            providers,
            case_format,
        }
    }

    /// Build the real provider adapters in the configured order.
    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();
        let providers = config
            .provider_order()
            .into_iter()
            .map(|service| -> Box<dyn Translator> {
                match service {
                    ServiceName::MyMemory => Box::new(MyMemoryTranslator::new(client.clone())),
                    ServiceName::Google => Box::new(GoogleTranslator::new(client.clone())),
                    ServiceName::Baidu => Box::new(BaiduTranslator::new(
                        client.clone(),
                        config.baidu_app_id.clone(),
                        config.baidu_app_key.clone(),
                    )),
                }
            })
            .collect();

        Self::new(providers, config.case_format())
    }

    /// Provider services in the order they will be attempted.
    pub fn services(&self) -> Vec<ServiceName> {
        self.providers.iter().map(|p| p.service()).collect()
    }

    pub async fn translate(&self, text: &str) -> Result<String> {
        Ok(self.translate_detailed(text).await?.text)
    }

    /// Translate and report which provider answered.
    pub async fn translate_detailed(&self, text: &str) -> Result<Translation> {
        let input = text.trim();
        if input.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let languages = LanguagePair::for_text(input);
        debug!("Detected {}", languages);

        let source_text = if languages.source == Language::English && is_mixed_case(input) {
            let normalized = normalize_for_translation(input);
            debug!("Normalized identifier {:?} -> {:?}", input, normalized);
            normalized
        } else {
            input.to_string()
        };

        let (translated, provider) = self.try_providers(&source_text, languages).await?;

        let text = if languages.is_chinese_to_english() {
            format_case(&translated, self.case_format)
        } else {
            translated
        };

        Ok(Translation {
            text,
            source_text,
            languages,
            provider,
        })
    }

    /// Sequential fallback loop. Stops at the first success.
    async fn try_providers(
        &self,
        text: &str,
        languages: LanguagePair,
    ) -> Result<(String, ServiceName)> {
        let mut failures: Vec<ProviderFailure> = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let started = Instant::now();
            debug!("Trying {}", provider.name());

            match provider
                .translate(text, languages.source, languages.target)
                .await
            {
                Ok(translated) => {
                    info!(
                        "Translated {} with {} in {}ms",
                        languages,
                        provider.name(),
                        started.elapsed().as_millis()
                    );
                    return Ok((translated, provider.service()));
                }
                Err(e) => {
                    warn!("{} failed: {}", provider.name(), e);
                    failures.push(ProviderFailure {
                        provider: provider.service(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Err(TranslateError::AllProvidersFailed(failures))
    }
}

/// Translate `text` using providers built from `config`.
///
/// The configuration is consulted on every call; nothing is cached between calls.
pub async fn translate(text: &str, config: &Config) -> Result<String> {
    TranslationOrchestrator::from_config(config)
        .translate(text)
        .await
}
