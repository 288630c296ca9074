//! Positional placeholder substitution for message templates.
//!
//! Templates use printf-style verbs: `%s`, `%d` and `%v` each consume the next
//! argument, and `%%` is a literal percent sign. Any other `%` sequence is
//! copied through unchanged.

use std::fmt::{
    Display,
    Write,
};

/// Verbs that consume one positional argument.
pub const PLACEHOLDER_VERBS: &[char] = &['s', 'd', 'v'];

/// Substitutes `args` into the placeholders of `template`, in order.
///
/// Placeholders beyond the supplied arguments are left as written, and
/// arguments beyond the placeholders are ignored.
///
/// # Examples
/// ```
/// use lingo::format::fill_placeholders;
///
/// assert_eq!(fill_placeholders("Page %s not found!", &[&"idnex.html"]), "Page idnex.html not found!");
/// assert_eq!(fill_placeholders("%s of %d", &[&3]), "3 of %d");
/// ```
#[must_use]
pub fn fill_placeholders(template: &str, args: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                result.push('%');
            }
            Some(verb) if PLACEHOLDER_VERBS.contains(&verb) => {
                chars.next();
                if let Some(arg) = args.next() {
                    // Writing into a String cannot fail.
                    let _ = write!(result, "{arg}");
                } else {
                    result.push('%');
                    result.push(verb);
                }
            }
            _ => result.push('%'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::single("Page %s not found!", "Page idnex.html not found!")]
    #[case::no_placeholder("Products", "Products")]
    #[case::missing_arg("%s and %s", "idnex.html and %s")]
    #[case::escaped_percent("100%% of %s", "100% of idnex.html")]
    #[case::unknown_verb("%x %s", "%x idnex.html")]
    #[case::trailing_percent("50%", "50%")]
    #[case::verb_v("[%v]", "[idnex.html]")]
    fn test_fill_single_arg(#[case] template: &str, #[case] expected: &str) {
        assert_that!(fill_placeholders(template, &[&"idnex.html"]), eq(expected));
    }

    #[googletest::test]
    fn test_fill_mixed_args_in_order() {
        let result = fill_placeholders("%s has %d new messages", &[&"Ana", &7]);

        expect_that!(result, eq("Ana has 7 new messages"));
    }

    #[googletest::test]
    fn test_extra_args_are_ignored() {
        let result = fill_placeholders("Hello %s", &[&"world", &"extra", &42]);

        expect_that!(result, eq("Hello world"));
    }

    #[googletest::test]
    fn test_multibyte_text_is_preserved() {
        let result = fill_placeholders("Größe: %s – ok", &[&"groß"]);

        expect_that!(result, eq("Größe: groß – ok"));
    }
}
