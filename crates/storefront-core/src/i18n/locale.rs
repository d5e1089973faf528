//! Locale metadata and writing direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default locale used when nothing better is available.
pub const DEFAULT_LOCALE: &str = "en";

/// Languages written right-to-left.
const RTL_LANGUAGES: &[&str] = &["he", "ar", "fa", "ur"];

/// Text/layout direction for a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (English, Spanish, ...)
    #[default]
    Ltr,
    /// Right-to-left (Hebrew, Arabic, ...)
    Rtl,
}

impl Direction {
    /// Direction implied by a locale tag. Region subtags and case are ignored.
    pub fn for_locale(locale: &str) -> Self {
        let lang = language_of(locale).to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&lang.as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_html_dir(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_html_dir())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(format!("unknown direction '{}' (expected ltr or rtl)", other)),
        }
    }
}

/// Metadata about a locale the storefront ships translations for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// ISO 639-1 language code
    pub code: &'static str,
    /// English name of the language
    pub name: &'static str,
    /// Native name of the language
    pub native_name: &'static str,
    pub direction: Direction,
}

/// Supported storefront locales.
pub const LOCALES: &[LocaleInfo] = &[
    LocaleInfo {
        code: "en",
        name: "English",
        native_name: "English",
        direction: Direction::Ltr,
    },
    LocaleInfo {
        code: "he",
        name: "Hebrew",
        native_name: "עברית",
        direction: Direction::Rtl,
    },
];

/// Language part of a locale tag: `"en-US"` → `"en"`, `"he_IL"` → `"he"`.
pub fn language_of(locale: &str) -> &str {
    let trimmed = locale.trim();
    trimmed.split(['-', '_']).next().unwrap_or(trimmed)
}

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
    LOCALES.iter().find(|l| l.code == code)
}

pub fn is_supported(code: &str) -> bool {
    locale_info(code).is_some()
}

pub fn available_locales() -> Vec<&'static str> {
    LOCALES.iter().map(|l| l.code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_languages() {
        assert_eq!(Direction::for_locale("he"), Direction::Rtl);
        assert_eq!(Direction::for_locale("he-IL"), Direction::Rtl);
        assert_eq!(Direction::for_locale("ar_EG"), Direction::Rtl);
        assert_eq!(Direction::for_locale("FA"), Direction::Rtl);
        assert_eq!(Direction::for_locale("ur"), Direction::Rtl);
    }

    #[test]
    fn test_everything_else_is_ltr() {
        assert_eq!(Direction::for_locale("en"), Direction::Ltr);
        assert_eq!(Direction::for_locale("en-US"), Direction::Ltr);
        assert_eq!(Direction::for_locale(""), Direction::Ltr);
        assert_eq!(Direction::for_locale("hebrew"), Direction::Ltr);
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("RTL".parse::<Direction>().unwrap(), Direction::Rtl);
        assert_eq!(" ltr ".parse::<Direction>().unwrap(), Direction::Ltr);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Rtl.to_string(), "rtl");
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("en-US"), "en");
        assert_eq!(language_of("he_IL"), "he");
        assert_eq!(language_of("fr"), "fr");
        assert_eq!(language_of(""), "");
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("he"));
        assert!(!is_supported("fr"));
        assert_eq!(locale_info("he").unwrap().direction, Direction::Rtl);
        assert_eq!(available_locales(), vec!["en", "he"]);
    }
}
