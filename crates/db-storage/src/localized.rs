// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Bilingual (English/Bengali) text handling shared by models and the API.
//!
//! Language selection is a two-way switch, not locale negotiation: the
//! literal tag `bn` selects Bengali, anything else selects English.

use std::fmt;

/// The language a response is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Bengali,
}

impl Language {
    /// Resolves a raw language tag, `"bn"` selects Bengali on exact match
    pub fn from_tag(tag: &str) -> Self {
        if tag == "bn" {
            Self::Bengali
        } else {
            Self::English
        }
    }

    /// Resolves the raw `Accept-Language` header value, absent means English
    pub fn from_accept_language(raw: Option<&str>) -> Self {
        raw.map(Self::from_tag).unwrap_or_default()
    }

    pub const fn short_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Bengali => "bn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

/// A borrowed English/Bengali text pair
///
/// Models expose their bilingual column pairs through this type so the
/// two-way language switch lives in exactly one place. A missing Bengali
/// translation is stored as an empty string and resolved as such, never
/// silently replaced by the English variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<'a> {
    pub en: &'a str,
    pub bn: &'a str,
}

impl<'a> Localized<'a> {
    pub const fn new(en: &'a str, bn: &'a str) -> Self {
        Self { en, bn }
    }

    pub fn resolve(self, language: Language) -> &'a str {
        match language {
            Language::English => self.en,
            Language::Bengali => self.bn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bn_is_an_exact_match() {
        assert_eq!(Language::from_tag("bn"), Language::Bengali);
        assert_eq!(Language::from_tag("bn-BD"), Language::English);
        assert_eq!(Language::from_tag("bn;q=0.9"), Language::English);
        assert_eq!(Language::from_tag("en"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }

    #[test]
    fn absent_header_selects_english() {
        assert_eq!(Language::from_accept_language(None), Language::English);
        assert_eq!(
            Language::from_accept_language(Some("bn")),
            Language::Bengali
        );
    }

    #[test]
    fn resolve_picks_the_requested_variant() {
        let text = Localized::new("Wedding Ceremony", "বিবাহ অনুষ্ঠান");

        assert_eq!(text.resolve(Language::English), "Wedding Ceremony");
        assert_eq!(text.resolve(Language::Bengali), "বিবাহ অনুষ্ঠান");
    }

    #[test]
    fn missing_bengali_stays_empty() {
        let text = Localized::new("Venue", "");

        assert_eq!(text.resolve(Language::Bengali), "");
    }
}
