//! Language detection
//!
//! Priority order: explicit numeric selection, then Devanagari script
//! detection, then English. Marathi also uses Devanagari, so script alone
//! cannot separate it from Hindi; both land in the Hindi bucket. That is a
//! known limitation of the heuristic, not a bug.

use sahayak_core::Language;

/// True if the character falls in the Devanagari block (U+0900..=U+097F).
fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Detect the language of a message. Total: accepts any input, including
/// the empty string (which falls through to English).
pub fn detect_language(text: &str) -> Language {
    if let Some(language) = Language::from_selector(text) {
        return language;
    }

    if text.chars().any(is_devanagari) {
        return Language::Hindi;
    }

    Language::English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_selection() {
        assert_eq!(detect_language("1"), Language::English);
        assert_eq!(detect_language("2"), Language::Hindi);
        assert_eq!(detect_language("3"), Language::Marathi);
        assert_eq!(detect_language("  3  "), Language::Marathi);
    }

    #[test]
    fn test_devanagari_maps_to_hindi() {
        assert_eq!(detect_language("मेरी पेंशन की स्थिति"), Language::Hindi);
        // Marathi text also hits the Hindi bucket; script alone cannot split them
        assert_eq!(detect_language("अर्ज स्थिती तपासा"), Language::Hindi);
    }

    #[test]
    fn test_mixed_script_maps_to_hindi() {
        assert_eq!(detect_language("pension स्थिति check"), Language::Hindi);
    }

    #[test]
    fn test_latin_and_empty_map_to_english() {
        assert_eq!(detect_language("how do I apply"), Language::English);
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("42 schemes"), Language::English);
    }

    #[test]
    fn test_selector_overrides_script_detection() {
        // "1" alone selects English even though a longer Devanagari message
        // would map to Hindi
        assert_eq!(detect_language("1"), Language::English);
    }
}
