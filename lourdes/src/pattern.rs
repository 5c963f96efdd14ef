//! Regex helpers.

use regex::Regex;

/// First capture group of the first match of `regex` in `text`.
///
/// `None` when nothing matches or when group 1 did not take part in the
/// match.
pub fn first_group_match(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str().to_string())
}

/// Replace the first match of `regex` in `text`.
///
/// `$1` / `${name}` references in `replacement` expand to capture groups.
pub fn replace(regex: &Regex, replacement: &str, text: &str) -> String {
    regex.replace(text, replacement).into_owned()
}

/// Replace every match of `regex` in `text`, with the same group
/// expansion as [`replace`].
pub fn replace_all(regex: &Regex, replacement: &str, text: &str) -> String {
    regex.replace_all(text, replacement).into_owned()
}
