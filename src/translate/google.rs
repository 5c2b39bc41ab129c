//! Unofficial Google Translate endpoint (`client=gtx`). No credentials, but
//! the response shape is undocumented and may change without notice.

use crate::config::ServiceName;
use crate::error::{Result, TranslateError};
use crate::text::Language;
use crate::translate::{fetch_json, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const GOOGLE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: GOOGLE_API_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn lang_code(lang: Language) -> &'static str {
        match lang {
            Language::Chinese => "zh-CN",
            other => other.code(),
        }
    }
}

/// Concatenate the segment strings found at `body[0][i][0]`.
fn extract_segments(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .filter(|segments| !segments.is_empty())
        .ok_or_else(|| {
            TranslateError::EmptyResponse("Google response has no translation segments".to_string())
        })?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslateError::EmptyResponse(
            "Google response segments contain no text".to_string(),
        ));
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let request = self.client.get(&self.endpoint).query(&[
            ("client", "gtx"),
            ("sl", Self::lang_code(from)),
            ("tl", Self::lang_code(to)),
            ("dt", "t"),
            ("q", text),
        ]);
        let body: Value = fetch_json(request, self.name()).await?;
        extract_segments(&body)
    }

    fn service(&self) -> ServiceName {
        ServiceName::Google
    }

    fn name(&self) -> &'static str {
        "Google Translate"
    }
}
