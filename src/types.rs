//! Core types used throughout the project.

use std::fmt;
use std::hash::{
    Hash,
    Hasher,
};

/// Canonical subtag separator. `-` is accepted on input and rewritten to this.
pub const LOCALE_SEPARATOR: char = '_';

/// Tag that matches any locale in a preference header.
pub const WILDCARD_TAG: &str = "*";

/// A language tag such as `en_US`, `de-AT` or `sr`.
///
/// Hyphen and underscore are equivalent; the tag is rewritten to use `_` on
/// construction. Equality and hashing ignore ASCII case, so `en-us` and
/// `en_US` are the same locale. The lowercase form and the primary subtag are
/// computed once here and reused during negotiation.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Tag as written, with `_` as separator.
    tag: String,
    /// Lowercased `tag`, used for comparison.
    key: String,
    /// Byte length of the primary subtag within `key`.
    primary_len: usize,
}

impl Locale {
    /// Creates a locale from a raw tag, trimming whitespace and normalizing separators.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let tag = raw.trim().replace('-', "_");
        let key = tag.to_ascii_lowercase();
        let primary_len = key.find(LOCALE_SEPARATOR).unwrap_or(key.len());
        Self { tag, key, primary_len }
    }

    /// The normalized tag (e.g. `en_US`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Lowercased tag used for matching (e.g. `en_us`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Language portion before the first separator, lowercased (e.g. `de` for `de_DE`).
    #[must_use]
    pub fn primary(&self) -> &str {
        self.key.get(..self.primary_len).unwrap_or(&self.key)
    }

    /// Whether this is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.key == WILDCARD_TAG
    }

    /// Whether the tag is empty after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Whether both locales share a primary language subtag.
    #[must_use]
    pub fn same_language(&self, other: &Self) -> bool {
        !self.is_empty() && self.primary() == other.primary()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Locale {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&String> for Locale {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<&Locale> for Locale {
    fn from(locale: &Locale) -> Self {
        locale.clone()
    }
}
