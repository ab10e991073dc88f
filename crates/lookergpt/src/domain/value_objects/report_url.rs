//! Report URL extraction
//!
//! The model answers in free text; the first URL-looking run in it is the
//! report link. The same pattern is handed to the browser page so the "Open"
//! button and the CLI agree on what they open.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// URL pattern, matched case-insensitively.
///
/// Optional scheme, a host-like run ending in a short TLD, then an optional
/// path/query tail. The tail admits `,` `[` `]` because explore URLs carry
/// comma-separated field lists and `f[...]` filters. Written to be valid both
/// for `regex` and JavaScript `RegExp`; both sides match with ASCII semantics
/// for `\b` and case folding.
pub const URL_PATTERN: &str =
    r"(?:https?://)?[-a-z0-9@:%._+~#=]{1,256}\.[a-z0-9()]{1,6}\b[-a-z0-9()@:%_+.~#?&/=,\[\]]*";

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        RegexBuilder::new(URL_PATTERN)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .expect("URL_PATTERN is a valid regex")
    })
}

/// Return the leftmost URL-looking substring of `text`, or `None`.
pub fn extract_report_url(text: &str) -> Option<&str> {
    url_regex().find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(RegexBuilder::new(URL_PATTERN).unicode(false).build().is_ok());
    }

    #[test]
    fn test_extracts_url_from_sentence() {
        assert_eq!(
            extract_report_url("Go to https://example.com/path?x=1 now"),
            Some("https://example.com/path?x=1")
        );
    }

    #[test]
    fn test_takes_first_of_several() {
        let text = "see http://a.example.org/one then https://b.example.org/two";
        assert_eq!(extract_report_url(text), Some("http://a.example.org/one"));
    }

    #[test]
    fn test_schemeless_host() {
        assert_eq!(
            extract_report_url("try headout.looker.com/explore please"),
            Some("headout.looker.com/explore")
        );
    }

    #[test]
    fn test_uppercase_scheme() {
        assert_eq!(
            extract_report_url("HTTPS://EXAMPLE.COM/X"),
            Some("HTTPS://EXAMPLE.COM/X")
        );
    }

    #[test]
    fn test_looker_explore_url() {
        let url = "https://headout.looker.com/explore/analytics_reporting/bookings?fields=bookings.tour_id,bookings.tour_name&f[bookings.experience_id]=19873&sorts=bookings.tour_id&limit=500";
        let text = format!("{url}\n");
        assert_eq!(extract_report_url(&text), Some(url));
    }

    #[test]
    fn test_non_ascii_letter_is_a_word_boundary() {
        assert_eq!(extract_report_url("voir example.comé/x"), Some("example.com"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // KELVIN SIGN folds to `k` under Unicode rules but not in the browser.
        assert_eq!(extract_report_url("go \u{212A}aiba.com"), Some("aiba.com"));
    }

    #[test]
    fn test_no_url() {
        assert_eq!(extract_report_url("nothing found"), None);
        assert_eq!(extract_report_url("Unauthorized"), None);
        assert_eq!(extract_report_url(""), None);
    }
}
