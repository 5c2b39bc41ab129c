pub mod config;
pub mod error;
pub mod interactive;
pub mod text;
pub mod translate;

pub use config::{CaseFormat, Config, ServiceName};
pub use error::{ProviderFailure, Result, TranslateError};
pub use translate::{translate, Translation, TranslationOrchestrator, Translator};
