//! Multilingual text values.
//!
//! A [`LocalizedString`] maps locale codes to translated text. Entries keep
//! the order they were inserted (or the order they appear in a serialized
//! document), which is the order the last-resort step of resolution walks.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::resolve::resolve;

/// Locale code → translated text, insertion ordered, keys unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedString {
    entries: Vec<(String, String)>,
}

impl LocalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    /// Insert or replace a translation. A replaced entry keeps its position.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        let locale = locale.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(code, _)| *code == locale) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((locale, text)),
        }
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, t)| (c.as_str(), t.as_str()))
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut s = Self::new();
        for (locale, text) in iter {
            s.insert(locale, text);
        }
        s
    }
}

impl Serialize for LocalizedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (locale, text) in &self.entries {
            map.serialize_entry(locale, text)?;
        }
        map.end()
    }
}

struct LocalizedStringVisitor;

impl<'de> Visitor<'de> for LocalizedStringVisitor {
    type Value = LocalizedString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of locale code to text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut s = LocalizedString::new();
        while let Some((locale, text)) = access.next_entry::<String, String>()? {
            s.insert(locale, text);
        }
        Ok(s)
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocalizedStringVisitor)
    }
}

/// A display field that is either untranslated text or a translation map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(LocalizedString),
}

impl LocalizedText {
    /// Best text for `locale`. Plain text is returned as-is for every locale.
    pub fn resolve<'a>(&'a self, locale: &str, fallback_locale: &str) -> &'a str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(content) => resolve(content, locale, fallback_locale),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}

impl From<LocalizedString> for LocalizedText {
    fn from(content: LocalizedString) -> Self {
        LocalizedText::Localized(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut s = LocalizedString::new().with("en", "Bags").with("he", "תיקים");
        s.insert("en", "Bags & Packs");
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("en"), Some("Bags & Packs"));
        assert_eq!(s.locales().collect::<Vec<_>>(), vec!["en", "he"]);
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let s: LocalizedString =
            serde_json::from_str(r#"{"fr": "Sacs", "he": "תיקים", "en": "Bags"}"#).unwrap();
        assert_eq!(s.locales().collect::<Vec<_>>(), vec!["fr", "he", "en"]);
    }

    #[test]
    fn test_serialize_as_map() {
        let s = LocalizedString::new().with("he", "תיקים").with("en", "Bags");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"he":"תיקים","en":"Bags"}"#);
    }

    #[test]
    fn test_localized_text_untagged() {
        let plain: LocalizedText = serde_json::from_str(r#""Tactical Gear""#).unwrap();
        assert_eq!(plain, LocalizedText::Plain("Tactical Gear".to_string()));

        let localized: LocalizedText =
            serde_json::from_str(r#"{"en": "Tactical Gear", "he": "ציוד טקטי"}"#).unwrap();
        assert!(matches!(localized, LocalizedText::Localized(_)));
    }

    #[test]
    fn test_plain_text_ignores_locale() {
        let text = LocalizedText::from("Bags & Packs");
        assert_eq!(text.resolve("he", "en"), "Bags & Packs");
    }

    #[test]
    fn test_from_iterator() {
        let s: LocalizedString = [("en", "Boots"), ("he", "מגפיים")].into_iter().collect();
        assert_eq!(s.get("he"), Some("מגפיים"));
        assert!(!s.is_empty());
    }
}
