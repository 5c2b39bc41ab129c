use crate::error::{Result, TranslateError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Provider order used when nothing valid is configured.
pub const DEFAULT_SERVICES: [ServiceName; 3] =
    [ServiceName::MyMemory, ServiceName::Google, ServiceName::Baidu];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceName {
    MyMemory,
    Google,
    Baidu,
}

impl ServiceName {
    /// Exact, case-sensitive match against a configured identifier.
    pub fn from_config_value(value: &str) -> Option<Self> {
        DEFAULT_SERVICES
            .into_iter()
            .find(|service| service.to_string() == value)
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceName::MyMemory => write!(f, "mymemory"),
            ServiceName::Google => write!(f, "google"),
            ServiceName::Baidu => write!(f, "baidu"),
        }
    }
}

impl std::str::FromStr for ServiceName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mymemory" => Ok(ServiceName::MyMemory),
            "google" => Ok(ServiceName::Google),
            "baidu" => Ok(ServiceName::Baidu),
            _ => Err(format!(
                "Unknown translation service: {}. Use 'mymemory', 'google', or 'baidu'",
                s
            )),
        }
    }
}

/// Naming style applied to English output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFormat {
    Pascal,
    Camel,
    Snake,
    Space,
    #[default]
    None,
}

const CASE_FORMATS: [CaseFormat; 5] = [
    CaseFormat::Pascal,
    CaseFormat::Camel,
    CaseFormat::Snake,
    CaseFormat::Space,
    CaseFormat::None,
];

impl CaseFormat {
    /// Match a configured value exactly, collapsing anything else to `None`.
    pub fn parse_lenient(s: &str) -> Self {
        CASE_FORMATS
            .into_iter()
            .find(|format| format.to_string() == s)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseFormat::Pascal => write!(f, "pascal"),
            CaseFormat::Camel => write!(f, "camel"),
            CaseFormat::Snake => write!(f, "snake"),
            CaseFormat::Space => write!(f, "space"),
            CaseFormat::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for CaseFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pascal" => Ok(CaseFormat::Pascal),
            "camel" => Ok(CaseFormat::Camel),
            "snake" => Ok(CaseFormat::Snake),
            "space" => Ok(CaseFormat::Space),
            "none" => Ok(CaseFormat::None),
            _ => Err(format!(
                "Unknown case format: {}. Use 'pascal', 'camel', 'snake', 'space', or 'none'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider identifiers in priority order. Invalid entries are dropped.
    pub translation_services: Vec<String>,
    pub english_case_format: String,
    pub baidu_app_id: Option<String>,
    pub baidu_app_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_services: DEFAULT_SERVICES.iter().map(ToString::to_string).collect(),
            english_case_format: CaseFormat::None.to_string(),
            baidu_app_id: None,
            baidu_app_key: None,
        }
    }
}

impl Config {
    /// Load from the user config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load an explicit config file without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents).map_err(|e| {
            TranslateError::Config(format!("{}: {}", path.display(), e.message()))
        })?;
        config.baidu_app_id = non_empty(config.baidu_app_id);
        config.baidu_app_key = non_empty(config.baidu_app_key);
        Ok(config)
    }

    /// Write the config back to the user config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path().ok_or_else(|| {
            TranslateError::Config("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply `AUTOTRANSLATE_*` and `BAIDU_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(services) = lookup("AUTOTRANSLATE_SERVICES") {
            self.translation_services = services
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(format) = lookup("AUTOTRANSLATE_CASE_FORMAT") {
            self.english_case_format = format.trim().to_string();
        }
        if let Some(id) = lookup("BAIDU_APP_ID") {
            self.baidu_app_id = non_empty(Some(id));
        }
        if let Some(key) = lookup("BAIDU_APP_KEY") {
            self.baidu_app_key = non_empty(Some(key));
        }
    }

    /// Effective provider order: valid, deduplicated, never empty.
    pub fn provider_order(&self) -> Vec<ServiceName> {
        let mut order: Vec<ServiceName> = Vec::with_capacity(DEFAULT_SERVICES.len());
        for entry in &self.translation_services {
            match ServiceName::from_config_value(entry) {
                Some(service) if !order.contains(&service) => order.push(service),
                Some(_) => {}
                None => debug!("Ignoring unknown translation service {:?}", entry),
            }
        }

        if order.is_empty() {
            return DEFAULT_SERVICES.to_vec();
        }
        order
    }

    pub fn case_format(&self) -> CaseFormat {
        CaseFormat::parse_lenient(&self.english_case_format)
    }

    pub fn has_baidu_credentials(&self) -> bool {
        self.baidu_app_id.is_some() && self.baidu_app_key.is_some()
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("autotranslate").join("config.toml"))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
