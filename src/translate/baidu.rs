//! Baidu general translation API. Requires an app id and secret key.

use crate::config::ServiceName;
use crate::error::{Result, TranslateError};
use crate::text::Language;
use crate::translate::{fetch_json, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const BAIDU_API_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Baidu reports success with this code when it includes one at all.
const BAIDU_SUCCESS_CODE: &str = "52000";

pub struct BaiduTranslator {
    client: Client,
    endpoint: String,
    app_id: Option<String>,
    app_key: Option<String>,
}

impl BaiduTranslator {
    pub fn new(client: Client, app_id: Option<String>, app_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: BAIDU_API_URL.to_string(),
            app_id,
            app_key,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (self.app_id.as_deref(), self.app_key.as_deref()) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => Ok((id, key)),
            _ => Err(TranslateError::MissingCredentials(
                "Baidu Translate needs baidu_app_id and baidu_app_key".to_string(),
            )),
        }
    }
}

/// MD5 hex digest of `app_id + text + salt + app_key`.
fn sign(app_id: &str, text: &str, salt: &str, app_key: &str) -> String {
    format!(
        "{:x}",
        md5::compute(format!("{}{}{}{}", app_id, text, salt, app_key))
    )
}

fn timestamp_salt() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}

#[derive(Deserialize, Debug)]
struct BaiduResponse {
    trans_result: Option<Vec<BaiduResult>>,
    error_code: Option<Value>,
    error_msg: Option<String>,
}

#[derive(Deserialize, Debug)]
struct BaiduResult {
    dst: String,
}

fn error_code(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn extract_result(response: BaiduResponse) -> Result<String> {
    if let Some(code) = response.error_code.as_ref().map(error_code) {
        if code != BAIDU_SUCCESS_CODE {
            return Err(TranslateError::Api(format!(
                "Baidu error {}: {}",
                code,
                response.error_msg.unwrap_or_default()
            )));
        }
    }

    // One entry per input line.
    let lines: Vec<String> = response
        .trans_result
        .unwrap_or_default()
        .into_iter()
        .map(|r| r.dst)
        .collect();

    if lines.is_empty() {
        return Err(TranslateError::EmptyResponse(
            "Baidu returned no trans_result".to_string(),
        ));
    }
    Ok(lines.join("\n"))
}

#[async_trait]
impl Translator for BaiduTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let (app_id, app_key) = self.credentials()?;

        let salt = timestamp_salt();
        let signature = sign(app_id, text, &salt, app_key);
        debug!("Baidu request salt={}", salt);

        let request = self.client.get(&self.endpoint).query(&[
            ("q", text),
            ("from", from.code()),
            ("to", to.code()),
            ("appid", app_id),
            ("salt", salt.as_str()),
            ("sign", signature.as_str()),
        ]);
        let response: BaiduResponse = fetch_json(request, self.name()).await?;
        extract_result(response)
    }

    fn service(&self) -> ServiceName {
        ServiceName::Baidu
    }

    fn name(&self) -> &'static str {
        "Baidu Translate"
    }
}
