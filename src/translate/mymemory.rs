//! MyMemory translation API. Free, no credentials.

use crate::config::ServiceName;
use crate::error::{Result, TranslateError};
use crate::text::Language;
use crate::translate::{fetch_json, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

pub struct MyMemoryTranslator {
    client: Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: MYMEMORY_API_URL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (mock servers, proxies).
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

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    // Usually a number, but some error replies send it as a string.
    response_status: Option<Value>,
    response_data: Option<MyMemoryData>,
    response_details: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: Option<String>,
}

fn status_code(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let langpair = format!("{}|{}", Self::lang_code(from), Self::lang_code(to));
        debug!("MyMemory request langpair={}", langpair);

        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())]);
        let response: MyMemoryResponse = fetch_json(request, self.name()).await?;

        let status = status_code(response.response_status.as_ref());
        if status != Some(200) {
            let status = status.map_or_else(|| "unknown".to_string(), |s| s.to_string());
            let detail = response
                .response_details
                .filter(|d| !d.trim().is_empty())
                .map(|d| format!(" ({})", d))
                .unwrap_or_default();
            return Err(TranslateError::Api(format!(
                "MyMemory responseStatus {}{}",
                status, detail
            )));
        }

        response
            .response_data
            .and_then(|data| data.translated_text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TranslateError::EmptyResponse("MyMemory returned no translatedText".to_string())
            })
    }

    fn service(&self) -> ServiceName {
        ServiceName::MyMemory
    }

    fn name(&self) -> &'static str {
        "MyMemory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lang_codes() {
        assert_eq!(MyMemoryTranslator::lang_code(Language::Chinese), "zh-CN");
        assert_eq!(MyMemoryTranslator::lang_code(Language::English), "en");
    }

    #[test]
    fn test_status_code_accepts_number_or_string() {
        assert_eq!(status_code(Some(&json!(200))), Some(200));
        assert_eq!(status_code(Some(&json!("403"))), Some(403));
        assert_eq!(status_code(Some(&json!(null))), None);
        assert_eq!(status_code(None), None);
    }

    #[test]
    fn test_translator_identity() {
        let translator = MyMemoryTranslator::new(Client::new());
        assert_eq!(translator.service(), ServiceName::MyMemory);
        assert_eq!(translator.endpoint, MYMEMORY_API_URL);
    }
}
