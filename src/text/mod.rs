//! Text handling around a translation: language routing, identifier
//! normalization and output case formatting.

pub mod case;
pub mod detect;

pub use case::{format_case, is_mixed_case, normalize_for_translation, split_mixed_case};
pub use detect::{detect_language, Language, LanguagePair};
