//! Request-like header access.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::hash::BuildHasher;

/// Header carrying the caller's language preferences.
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Anything that can return a header value by name.
///
/// Header names are matched without regard to ASCII case, as in HTTP.
pub trait HeaderSource {
    /// Value of the header `name`, if present.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Finds `name` in key/value pairs, ignoring ASCII case.
fn find_header<'a, K, V, I>(pairs: I, name: &str) -> Option<&'a str>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    pairs
        .into_iter()
        .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_ref())
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str).or_else(|| find_header(self.iter(), name))
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str).or_else(|| find_header(self.iter(), name))
    }
}

impl HeaderSource for [(&str, &str)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| *value)
    }
}

impl<const N: usize> HeaderSource for [(&str, &str); N] {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn test_hash_map_lookup_ignores_case() {
        let headers: HashMap<String, String> =
            [("accept-language".to_string(), "de-at".to_string())].into_iter().collect();

        expect_that!(headers.header(ACCEPT_LANGUAGE), some(eq("de-at")));
        expect_that!(headers.header("accept-language"), some(eq("de-at")));
        expect_that!(headers.header("Expected-Results"), none());
    }

    #[googletest::test]
    fn test_btree_map_lookup() {
        let headers: BTreeMap<String, String> =
            [("Accept-Language".to_string(), "en-US".to_string())].into_iter().collect();

        expect_that!(headers.header("ACCEPT-LANGUAGE"), some(eq("en-US")));
    }

    #[googletest::test]
    fn test_pair_slice_lookup() {
        let headers = [("Host", "example.com"), ("ACCEPT-language", "sr")];

        expect_that!(headers.header(ACCEPT_LANGUAGE), some(eq("sr")));
        expect_that!((&headers[..]).header("host"), some(eq("example.com")));
        expect_that!(headers.header("Cookie"), none());
    }
}
