//! Localized content resolution.

use super::locale::{language_of, locale_info, DEFAULT_LOCALE};
use super::localized::LocalizedString;

/// Pick the best text in `content` for `locale`. Never fails.
///
/// Resolution order (first match wins):
/// 1. Exact key match on `locale`
/// 2. First key (insertion order) starting with the language of `locale`,
///    ignoring ASCII case
/// 3. Exact key match on `fallback_locale`
/// 4. First entry in insertion order
/// 5. Empty string
///
/// The exact steps compare keys verbatim. Callers without a configured
/// fallback use [`resolve_default`].
///
/// # Example
///
/// ```
/// use storefront_core::i18n::{resolve, LocalizedString};
///
/// let content = LocalizedString::new()
///     .with("en", "Tactical Gear")
///     .with("he", "ציוד טקטי");
///
/// assert_eq!(resolve(&content, "he-IL", "en"), "ציוד טקטי");
/// assert_eq!(resolve(&content, "fr", "en"), "Tactical Gear");
/// assert_eq!(resolve(&LocalizedString::new(), "fr", "en"), "");
/// ```
pub fn resolve<'a>(content: &'a LocalizedString, locale: &str, fallback_locale: &str) -> &'a str {
    if let Some(text) = content.get(locale) {
        tracing::trace!(locale, "resolved by exact match");
        return text;
    }

    // An empty language would prefix-match every key and shadow the fallback.
    let lang = language_of(locale);
    if !lang.is_empty() {
        let matches_lang = |code: &str| {
            code.get(..lang.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(lang))
        };
        if let Some((code, text)) = content.iter().find(|&(code, _)| matches_lang(code)) {
            tracing::trace!(locale, matched = code, "resolved by language match");
            return text;
        }
    }

    if let Some(text) = content.get(fallback_locale) {
        tracing::trace!(locale, fallback_locale, "resolved by fallback locale");
        return text;
    }

    match content.iter().next() {
        Some((code, text)) => {
            tracing::trace!(locale, used = code, "resolved by first entry");
            text
        }
        None => "",
    }
}

/// [`resolve`] with [`DEFAULT_LOCALE`] as the fallback locale.
pub fn resolve_default<'a>(content: &'a LocalizedString, locale: &str) -> &'a str {
    resolve(content, locale, DEFAULT_LOCALE)
}

/// Resolve optional content; absent content resolves to the empty string.
pub fn resolve_opt<'a>(
    content: Option<&'a LocalizedString>,
    locale: &str,
    fallback_locale: &str,
) -> &'a str {
    content
        .map(|c| resolve(c, locale, fallback_locale))
        .unwrap_or("")
}

/// Negotiate the storefront locale to render with.
///
/// Resolution order (highest to lowest priority):
/// 1. Requested locale, if supported
/// 2. Supported locale matching the requested locale's language
/// 3. Configured default, if supported
/// 4. `"en"`
pub fn resolve_locale(requested: Option<&str>, default_locale: &str) -> &'static str {
    if let Some(requested) = requested {
        if let Some(info) = locale_info(requested) {
            return info.code;
        }
        let lang = language_of(requested).to_ascii_lowercase();
        if let Some(info) = locale_info(&lang) {
            return info.code;
        }
    }

    if let Some(info) = locale_info(default_locale) {
        return info.code;
    }

    DEFAULT_LOCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tactical_gear() -> LocalizedString {
        LocalizedString::new()
            .with("en", "Tactical Gear")
            .with("he", "ציוד טקטי")
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve(&tactical_gear(), "he", "en"), "ציוד טקטי");
        assert_eq!(resolve(&tactical_gear(), "en", "en"), "Tactical Gear");
    }

    #[test]
    fn test_language_only_match() {
        assert_eq!(resolve(&tactical_gear(), "he-IL", "en"), "ציוד טקטי");
        assert_eq!(resolve(&tactical_gear(), "en_GB", "he"), "Tactical Gear");
    }

    #[test]
    fn test_language_match_finds_regional_key() {
        let content = LocalizedString::new()
            .with("en", "Color")
            .with("pt-BR", "Cor");
        assert_eq!(resolve(&content, "pt", "en"), "Cor");
    }

    #[test]
    fn test_language_match_ignores_case() {
        assert_eq!(resolve(&tactical_gear(), "HE", "en"), "ציוד טקטי");
        assert_eq!(resolve(&tactical_gear(), "He-il", "en"), "ציוד טקטי");
        let content = LocalizedString::new().with("en", "Color").with("PT-br", "Cor");
        assert_eq!(resolve(&content, "pt", "en"), "Cor");
    }

    #[test]
    fn test_language_match_skips_short_and_multibyte_keys() {
        let content = LocalizedString::new().with("é", "accent").with("en", "Plain");
        assert_eq!(resolve(&content, "fr", "en"), "Plain");
    }

    #[test]
    fn test_resolve_default_falls_back_to_english() {
        assert_eq!(resolve_default(&tactical_gear(), "fr"), "Tactical Gear");
        assert_eq!(resolve_default(&tactical_gear(), "he-IL"), "ציוד טקטי");
        let content = LocalizedString::new().with("de", "Ausrüstung").with("en", "Gear");
        assert_eq!(resolve_default(&content, "fr"), "Gear");
    }

    #[test]
    fn test_fallback_locale() {
        assert_eq!(resolve(&tactical_gear(), "fr", "en"), "Tactical Gear");
        assert_eq!(resolve(&tactical_gear(), "fr", "he"), "ציוד טקטי");
    }

    #[test]
    fn test_first_entry_is_last_resort() {
        let content = LocalizedString::new()
            .with("de", "Taktische Ausrüstung")
            .with("es", "Equipo táctico");
        assert_eq!(resolve(&content, "fr", "en"), "Taktische Ausrüstung");
    }

    #[test]
    fn test_empty_content_is_empty_string() {
        assert_eq!(resolve(&LocalizedString::new(), "fr", "en"), "");
        assert_eq!(resolve_opt(None, "he", "en"), "");
    }

    #[test]
    fn test_empty_locale_uses_fallback() {
        assert_eq!(resolve(&tactical_gear(), "", "he"), "ציוד טקטי");
    }

    #[test]
    fn test_missing_hebrew_name_falls_back_to_english() {
        let name = LocalizedString::new().with("en", "Bags & Packs");
        assert_eq!(resolve(&name, "he", "en"), "Bags & Packs");
    }

    #[test]
    fn test_resolve_locale_prefers_requested() {
        assert_eq!(resolve_locale(Some("he"), "en"), "he");
        assert_eq!(resolve_locale(Some("en"), "he"), "en");
    }

    #[test]
    fn test_resolve_locale_strips_region() {
        assert_eq!(resolve_locale(Some("he-IL"), "en"), "he");
        assert_eq!(resolve_locale(Some("EN-us"), "he"), "en");
    }

    #[test]
    fn test_resolve_locale_falls_back_to_default() {
        assert_eq!(resolve_locale(Some("fr"), "he"), "he");
        assert_eq!(resolve_locale(None, "he"), "he");
        assert_eq!(resolve_locale(Some("fr"), "xx"), "en");
        assert_eq!(resolve_locale(None, ""), "en");
    }

    proptest! {
        /// Resolution is total: non-empty content never resolves to a value
        /// that is not one of its entries.
        #[test]
        fn resolution_returns_an_entry(
            entries in proptest::collection::vec(("[a-z]{2}(-[A-Z]{2})?", "[a-zA-Z ]{1,12}"), 1..6),
            locale in "[a-z]{2}(-[A-Z]{2})?",
        ) {
            let content: LocalizedString = entries.into_iter().collect();
            let text = resolve(&content, &locale, "en");
            prop_assert!(content.iter().any(|(_, t)| t == text));
        }

        /// Repeated calls return the same text.
        #[test]
        fn resolution_is_deterministic(
            entries in proptest::collection::vec(("[a-z]{2}", "[a-z]{1,8}"), 0..6),
            locale in "[a-z]{2}",
        ) {
            let content: LocalizedString = entries.into_iter().collect();
            prop_assert_eq!(resolve(&content, &locale, "en"), resolve(&content, &locale, "en"));
        }
    }
}
