/// The two languages this tool translates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    /// Generic ISO 639-1 code. Providers map this to their own dialect.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    pub fn opposite(&self) -> Language {
        match self {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Source and target of a single translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn for_text(text: &str) -> Self {
        let source = detect_language(text);
        Self {
            source,
            target: source.opposite(),
        }
    }

    pub fn is_chinese_to_english(&self) -> bool {
        self.source == Language::Chinese && self.target == Language::English
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
}

/// Classify text as Chinese if it contains any CJK unified ideograph.
///
/// Anything else, including mixed or non-Latin scripts, is treated as English.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_cjk_ideograph) {
        Language::Chinese
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_chinese() {
        assert_eq!(detect_language("你好"), Language::Chinese);
        assert_eq!(detect_language("hello 世界"), Language::Chinese);
        assert_eq!(detect_language("get用户Name"), Language::Chinese);
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(detect_language("hello world"), Language::English);
        assert_eq!(detect_language("getUserName"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_other_scripts_are_english() {
        // Kana and Hangul fall outside the ideograph range.
        assert_eq!(detect_language("こんにちは"), Language::English);
        assert_eq!(detect_language("안녕하세요"), Language::English);
        assert_eq!(detect_language("Привет"), Language::English);
        // U+9FA6 is just past the range.
        assert_eq!(detect_language("\u{9FA6}"), Language::English);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(detect_language("\u{4E00}"), Language::Chinese);
        assert_eq!(detect_language("\u{9FA5}"), Language::Chinese);
        assert_eq!(detect_language("\u{4DFF}"), Language::English);
    }

    #[test]
    fn test_language_pair_routing() {
        let pair = LanguagePair::for_text("翻译");
        assert_eq!(pair.source, Language::Chinese);
        assert_eq!(pair.target, Language::English);
        assert!(pair.is_chinese_to_english());

        let pair = LanguagePair::for_text("translate");
        assert_eq!(pair.source, Language::English);
        assert_eq!(pair.target, Language::Chinese);
        assert!(!pair.is_chinese_to_english());
        assert_eq!(pair.to_string(), "en->zh");
    }
}
