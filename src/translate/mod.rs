pub mod baidu;
pub mod google;
pub mod mymemory;
pub mod orchestrator;

pub use baidu::BaiduTranslator;
pub use google::GoogleTranslator;
pub use mymemory::MyMemoryTranslator;
pub use orchestrator::{translate, Translation, TranslationOrchestrator};

use crate::config::ServiceName;
use crate::error::{Result, TranslateError};
use crate::text::Language;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A remote translation backend.
///
/// Implementations make exactly one attempt per call. Retrying and falling
/// back to another backend is the orchestrator's job.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;
    fn service(&self) -> ServiceName;
    fn name(&self) -> &'static str;
}

/// Send a GET request and decode a JSON body, mapping HTTP errors to `Api`.
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder, provider: &str) -> Result<T> {
    let response = request.send().await?;

    let status = response.status();
    debug!("{} response status: {}", provider, status);

    let body = response.text().await?;

    if !status.is_success() {
        // Keep the snippet on one line; failures are reported one per line.
        let snippet: String = body
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(200)
            .collect();
        return Err(TranslateError::Api(format!(
            "{} returned HTTP {}: {}",
            provider, status, snippet
        )));
    }

    if body.trim().is_empty() {
        return Err(TranslateError::EmptyResponse(format!(
            "{} returned an empty body",
            provider
        )));
    }

    Ok(serde_json::from_str(&body)?)
}
