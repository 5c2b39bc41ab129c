use crate::config::ServiceName;
use thiserror::Error;

/// One entry of the fallback error log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: ServiceName,
    pub message: String,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.provider, self.message)
    }
}

fn render_failures(failures: &[ProviderFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Nothing to translate: input is empty")]
    EmptyInput,

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Empty translation result: {0}")]
    EmptyResponse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(
        "all translation services failed:\n{}\n\nCheck your network connection or API credentials",
        render_failures(.0)
    )]
    AllProvidersFailed(Vec<ProviderFailure>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_failure_display() {
        let failure = ProviderFailure {
            provider: ServiceName::Google,
            message: "timed out".to_string(),
        };
        assert_eq!(failure.to_string(), "google: timed out");
    }

    #[test]
    fn test_all_failed_lists_providers_in_order() {
        let err = TranslateError::AllProvidersFailed(vec![
            ProviderFailure {
                provider: ServiceName::Baidu,
                message: "first".to_string(),
            },
            ProviderFailure {
                provider: ServiceName::MyMemory,
                message: "second".to_string(),
            },
        ]);
        let message = err.to_string();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "all translation services failed:");
        assert_eq!(lines[1], "baidu: first");
        assert_eq!(lines[2], "mymemory: second");
    }
}
