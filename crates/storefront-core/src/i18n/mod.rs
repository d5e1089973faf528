//! Localization support for storefront content.
//!
//! - `locale`: supported locales and writing direction
//! - `localized`: multilingual text values
//! - `resolve`: fallback-chain resolution of text and locale negotiation
//!
//! # Example
//!
//! ```
//! use storefront_core::i18n::{resolve, Direction, LocalizedString};
//!
//! let name = LocalizedString::new().with("en", "Bags & Packs");
//!
//! // No Hebrew entry: falls back to English
//! assert_eq!(resolve(&name, "he", "en"), "Bags & Packs");
//! assert_eq!(Direction::for_locale("he"), Direction::Rtl);
//! ```

mod locale;
mod localized;
mod resolve;

pub use locale::{
    available_locales, is_supported, language_of, locale_info, Direction, LocaleInfo,
    DEFAULT_LOCALE, LOCALES,
};
pub use localized::{LocalizedString, LocalizedText};
pub use resolve::{resolve, resolve_default, resolve_locale, resolve_opt};
