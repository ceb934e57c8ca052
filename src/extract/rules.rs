//! Ordered fallback chains for pattern-matched fields.
//!
//! A field with more than one way to locate its value (seller block
//! primary/fallback) is modeled as an ordered list of matchers tried in
//! sequence until the first success — not as nested conditionals — so
//! each strategy stays independently testable.

use regex::Regex;

/// One candidate strategy for locating a field's value.
pub(crate) type Matcher<T> = fn(&str) -> Option<T>;

/// Try matchers in order; the first that succeeds wins.
pub(crate) fn first_match<T>(text: &str, chain: &[Matcher<T>]) -> Option<T> {
    chain.iter().find_map(|matcher| matcher(text))
}

/// First capture group of `re` in `text`, owned.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_string())
}
