//! `Accept-Language` parsing and locale negotiation.
//!
//! Preference entries are tried from highest to lowest quality, keeping header
//! order for equal qualities. Each entry is matched against the loaded locales
//! in three steps: exact tag, then primary language subtag, then the `*`
//! wildcard (which selects the default locale). The first entry that matches
//! anything wins, so a higher-quality `de-at` that resolves to `de_DE` by
//! language beats a lower-quality exact match.

use std::fmt;

use crate::types::Locale;

/// Quality weight of a preference entry, stored in thousandths (`0..=1000`).
///
/// HTTP allows at most three decimal places, so this represents every valid
/// `q` value exactly and orders without floating-point comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
    /// Fully acceptable (`q=1`), the default when no `q` is given.
    pub const MAX: Self = Self(1000);
    /// Not acceptable (`q=0`).
    pub const ZERO: Self = Self(0);

    /// Creates a quality from thousandths, clamping to `1000`.
    #[must_use]
    pub const fn from_millis(millis: u16) -> Self {
        if millis > Self::MAX.0 { Self::MAX } else { Self(millis) }
    }

    /// Parses a `q` parameter value.
    ///
    /// Values outside `[0,1]` are clamped; anything that is not a finite number
    /// yields [`Quality::ZERO`]. Only an exact zero is unacceptable: a positive
    /// value finer than three decimals rounds up to `0.001`.
    #[must_use]
    #[allow(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                let millis = (value.min(1.0) * 1000.0).round() as u16;
                Self::from_millis(millis.max(1))
            }
            _ => Self::ZERO,
        }
    }

    #[must_use]
    pub const fn millis(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

/// One weighted language tag from a preference header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceEntry {
    pub tag: Locale,
    pub quality: Quality,
}

/// Parses a preference header (`tag[;q=value](,tag[;q=value])*`) in header order.
///
/// Empty entries are skipped. A missing `q` means `1`; a malformed one means
/// `0` and only affects its own entry.
///
/// # Examples
/// ```
/// use lingo::negotiate::parse_preferences;
///
/// let entries = parse_preferences("en-US, en-gb;q=0.8, en;q=0.7");
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1].tag.as_str(), "en_gb");
/// assert_eq!(entries[1].quality.millis(), 800);
/// ```
#[must_use]
pub fn parse_preferences(header_value: &str) -> Vec<PreferenceEntry> {
    header_value.split(',').filter_map(parse_entry).collect()
}

/// Parses one comma-separated entry, or `None` if it has no tag.
fn parse_entry(raw: &str) -> Option<PreferenceEntry> {
    let mut parts = raw.split(';');
    let tag = Locale::new(parts.next()?);
    if tag.is_empty() {
        return None;
    }

    let mut quality = Quality::MAX;
    for param in parts {
        let (name, value) = param.split_once('=').unwrap_or((param, ""));
        if name.trim().eq_ignore_ascii_case("q") {
            quality = Quality::parse(value);
        }
    }

    Some(PreferenceEntry { tag, quality })
}

/// Picks the best loaded locale for a preference header.
#[derive(Debug, Clone)]
pub struct LocaleNegotiator {
    /// Loaded locales in load order.
    available: Vec<Locale>,
    /// Locale selected by the `*` wildcard.
    default_locale: Locale,
}

impl LocaleNegotiator {
    /// Creates a negotiator over `available` (in load order).
    #[must_use]
    pub fn new(available: impl IntoIterator<Item = Locale>, default_locale: Locale) -> Self {
        Self { available: available.into_iter().collect(), default_locale }
    }

    #[must_use]
    pub fn available(&self) -> &[Locale] {
        &self.available
    }

    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Selects the locale for a raw header value, or `None` if nothing matches.
    #[must_use]
    pub fn select(&self, header_value: &str) -> Option<&Locale> {
        let selected = self.select_from(parse_preferences(header_value));
        tracing::debug!(
            header = header_value,
            selected = selected.map(Locale::as_str),
            "Negotiated locale"
        );
        selected
    }

    /// Selects the locale for already parsed entries.
    #[must_use]
    pub fn select_from(&self, mut entries: Vec<PreferenceEntry>) -> Option<&Locale> {
        // Stable sort: equal qualities keep header order.
        entries.sort_by(|a, b| b.quality.cmp(&a.quality));

        entries
            .iter()
            .filter(|entry| !entry.quality.is_zero())
            .find_map(|entry| self.match_entry(&entry.tag))
    }

    /// Matches one tag: exact, then primary subtag, then wildcard.
    fn match_entry(&self, tag: &Locale) -> Option<&Locale> {
        if let Some(exact) = self.available.iter().find(|locale| *locale == tag) {
            tracing::trace!(%tag, matched = %exact, "Exact locale match");
            return Some(exact);
        }

        if let Some(same_language) = self.available.iter().find(|locale| locale.same_language(tag))
        {
            tracing::trace!(%tag, matched = %same_language, "Primary subtag match");
            return Some(same_language);
        }

        if tag.is_wildcard() {
            tracing::trace!(matched = %self.default_locale, "Wildcard match");
            return Some(&self.default_locale);
        }

        None
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn negotiator(available: &[&str], default_locale: &str) -> LocaleNegotiator {
        LocaleNegotiator::new(
            available.iter().copied().map(Locale::new),
            Locale::new(default_locale),
        )
    }

    #[rstest]
    #[case::absent("", 1000)]
    #[case::one("1", 1000)]
    #[case::fraction("0.8", 800)]
    #[case::three_decimals("0.125", 125)]
    #[case::padded(" 0.5 ", 500)]
    #[case::above_one("1.5", 1000)]
    #[case::negative("-0.3", 0)]
    #[case::garbage("abc", 0)]
    #[case::nan("NaN", 0)]
    #[case::infinite("inf", 0)]
    #[case::exact_zero("0.000", 0)]
    #[case::below_precision("0.0004", 1)]
    fn test_quality_parse(#[case] raw: &str, #[case] millis: u16) {
        let quality = if raw.is_empty() { Quality::default() } else { Quality::parse(raw) };

        assert_that!(quality.millis(), eq(millis));
    }

    #[googletest::test]
    fn test_quality_display_and_fraction() {
        expect_that!(Quality::from_millis(800).to_string(), eq("0.800"));
        expect_that!(Quality::MAX.to_string(), eq("1.000"));
        expect_that!(Quality::from_millis(5000), eq(Quality::MAX));
    }

    #[googletest::test]
    fn test_parse_preferences_keeps_header_order() {
        let entries = parse_preferences("en-US, en-gb;q=0.8, en;q=0.7");

        let tags: Vec<String> = entries.iter().map(|e| e.tag.to_string()).collect();
        let qualities: Vec<u16> = entries.iter().map(|e| e.quality.millis()).collect();
        expect_that!(tags, elements_are![eq("en_US"), eq("en_gb"), eq("en")]);
        assert_eq!(qualities, [1000, 800, 700]);
    }

    #[googletest::test]
    fn test_parse_preferences_malformed_q_does_not_stop_parsing() {
        let entries = parse_preferences("fr;q=oops, de;q=0.9, en");

        expect_that!(entries.len(), eq(3));
        expect_that!(entries[0].quality, eq(Quality::ZERO));
        expect_that!(entries[1].quality.millis(), eq(900));
        expect_that!(entries[2].quality, eq(Quality::MAX));
    }

    #[googletest::test]
    fn test_parse_preferences_skips_empty_entries_and_other_params() {
        let entries = parse_preferences(" , en;level=1;Q=0.4,, ;q=0.9, *");

        let tags: Vec<String> = entries.iter().map(|e| e.tag.to_string()).collect();
        expect_that!(tags, elements_are![eq("en"), eq("*")]);
        expect_that!(entries[0].quality.millis(), eq(400));
    }

    #[googletest::test]
    fn test_parse_preferences_q_without_value_is_zero() {
        let entries = parse_preferences("de;q");

        assert_that!(entries[0].quality, eq(Quality::ZERO));
    }

    #[rstest]
    #[case::exact("en-US, en-gb;q=0.8, en;q=0.7", Some("en_US"))]
    #[case::primary_subtag("de-at, en-gb;q=0.8, en;q=0.7", Some("de_DE"))]
    #[case::unknown_then_primary("sr, en-gb;q=0.8, en;q=0.7", Some("en_US"))]
    #[case::case_insensitive("DE-de", Some("de_DE"))]
    #[case::quality_order("en;q=0.5, de;q=0.9", Some("de_DE"))]
    #[case::wildcard("sr, *;q=0.1", Some("en_US"))]
    #[case::no_match("sr, ja-JP;q=0.8", None)]
    #[case::empty_header("", None)]
    #[case::zero_quality_excluded("de;q=0, sr", None)]
    #[case::zero_quality_wildcard_excluded("sr, *;q=0", None)]
    #[case::malformed_q_then_valid("de;q=x, en-US;q=0.3", Some("en_US"))]
    fn test_select(#[case] header: &str, #[case] expected: Option<&str>) {
        let negotiator = negotiator(&["en_US", "de_DE"], "en_US");

        let selected = negotiator.select(header).map(Locale::as_str);

        assert_that!(selected, eq(expected));
    }

    #[googletest::test]
    fn test_select_tiny_positive_quality_is_acceptable() {
        let negotiator = negotiator(&["en_US", "de_DE"], "en_US");

        let selected = negotiator.select("sr, de;q=0.0004");

        assert_that!(selected.map(Locale::as_str), some(eq("de_DE")));
    }

    #[googletest::test]
    fn test_select_equal_quality_keeps_header_order() {
        let negotiator = negotiator(&["en_US", "de_DE"], "en_US");

        let selected = negotiator.select("de;q=0.8, en;q=0.8");

        assert_that!(selected.map(Locale::as_str), some(eq("de_DE")));
    }

    #[googletest::test]
    fn test_select_primary_prefers_first_loaded() {
        let negotiator = negotiator(&["en_GB", "de_DE", "en_US"], "de_DE");

        let selected = negotiator.select("en-AU");

        assert_that!(selected.map(Locale::as_str), some(eq("en_GB")));
    }

    #[googletest::test]
    fn test_select_higher_quality_primary_beats_lower_exact() {
        let negotiator = negotiator(&["en_US", "de_DE"], "en_US");

        let selected = negotiator.select("de-CH, en-US;q=0.5");

        assert_that!(selected.map(Locale::as_str), some(eq("de_DE")));
    }

    #[googletest::test]
    fn test_select_exact_beats_primary_within_entry() {
        let negotiator = negotiator(&["pt_PT", "pt_BR"], "pt_PT");

        let selected = negotiator.select("pt-BR");

        assert_that!(selected.map(Locale::as_str), some(eq("pt_BR")));
    }
}
