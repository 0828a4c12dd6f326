//! Assertion helpers
//!
//! Panic-style helpers whose failure messages name what was being matched,
//! so a failing test says more than "assertion failed".

use std::ops::BitOr;

use regex::RegexBuilder;

/// Regex compilation flags, mergeable with bitwise OR
///
/// A [`Pattern`] compiled with flags keeps them; flags passed to
/// [`assert_regex_matches_with_flags`] are OR-ed on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegexFlags(u32);

impl RegexFlags {
    /// No flags
    pub const NONE: RegexFlags = RegexFlags(0);
    /// Case-insensitive matching
    pub const IGNORECASE: RegexFlags = RegexFlags(1);
    /// `^` and `$` match at line boundaries
    pub const MULTILINE: RegexFlags = RegexFlags(1 << 1);
    /// `.` matches newlines too
    pub const DOTALL: RegexFlags = RegexFlags(1 << 2);

    /// True if every flag in `other` is set in `self`
    pub const fn contains(self, other: RegexFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RegexFlags {
    type Output = RegexFlags;

    fn bitor(self, rhs: RegexFlags) -> RegexFlags {
        RegexFlags(self.0 | rhs.0)
    }
}

/// A search pattern: either a raw string or one pre-built with flags
#[derive(Debug, Clone)]
pub enum Pattern<'a> {
    /// Pattern source with no flags of its own
    Raw(&'a str),
    /// Pattern source carrying its own flags
    WithFlags(&'a str, RegexFlags),
}

impl<'a> Pattern<'a> {
    /// Build a pattern that carries its own flags
    pub const fn with_flags(source: &'a str, flags: RegexFlags) -> Self {
        Pattern::WithFlags(source, flags)
    }

    fn source(&self) -> &'a str {
        match self {
            Pattern::Raw(source) => source,
            Pattern::WithFlags(source, _) => source,
        }
    }

    fn flags(&self) -> RegexFlags {
        match self {
            Pattern::Raw(_) => RegexFlags::NONE,
            Pattern::WithFlags(_, flags) => *flags,
        }
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(source: &'a str) -> Self {
        Pattern::Raw(source)
    }
}

/// Assert that `pattern` is found anywhere in `text`
///
/// `flags` are merged with any flags the pattern already carries via bitwise
/// OR. Succeeds silently on a match; panics with a message naming both the
/// pattern and the text otherwise.
///
/// # Panics
///
/// Panics if the pattern does not match, or if it is not a valid regex.
#[track_caller]
pub fn assert_regex_matches_with_flags<'a>(
    text: &str,
    pattern: impl Into<Pattern<'a>>,
    flags: RegexFlags,
) {
    let pattern = pattern.into();
    let merged = pattern.flags() | flags;

    let regex = RegexBuilder::new(pattern.source())
        .case_insensitive(merged.contains(RegexFlags::IGNORECASE))
        .multi_line(merged.contains(RegexFlags::MULTILINE))
        .dot_matches_new_line(merged.contains(RegexFlags::DOTALL))
        .build()
        .unwrap_or_else(|e| panic!("Invalid regex {:?}: {e}", pattern.source()));

    if !regex.is_match(text) {
        panic!(
            "Regex didn't match: {:?} not found in {:?}",
            pattern.source(),
            text
        );
    }
}

/// Assert that `text` contains exactly `expected` newline characters
#[track_caller]
pub fn assert_num_lines(text: &str, expected: usize) {
    let actual = text.matches('\n').count();
    assert_eq!(
        actual, expected,
        "Expected {expected} lines in {text:?}, found {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_match_succeeds() {
        assert_regex_matches_with_flags("some abc text", "abc", RegexFlags::NONE);
    }

    #[test]
    fn test_ignorecase_flag() {
        assert_regex_matches_with_flags("ABC", "abc", RegexFlags::IGNORECASE);
    }

    #[test]
    fn test_failure_names_pattern_and_text() {
        let result = std::panic::catch_unwind(|| {
            assert_regex_matches_with_flags("ABC", "xyz", RegexFlags::NONE);
        });
        let message = *result.unwrap_err().downcast::<String>().unwrap();
        assert!(message.contains("xyz"));
        assert!(message.contains("ABC"));
    }

    #[test]
    fn test_precompiled_flags_are_merged() {
        let pattern = Pattern::with_flags("^abc$", RegexFlags::MULTILINE);
        // IGNORECASE comes from the call, MULTILINE from the pattern.
        assert_regex_matches_with_flags("first\nABC\nlast", pattern, RegexFlags::IGNORECASE);
    }

    #[test]
    fn test_dotall_flag() {
        assert_regex_matches_with_flags("a\nb", Pattern::Raw("a.b"), RegexFlags::DOTALL);
    }

    #[test]
    fn test_flag_or_and_contains() {
        let merged = RegexFlags::IGNORECASE | RegexFlags::DOTALL;
        assert!(merged.contains(RegexFlags::IGNORECASE));
        assert!(merged.contains(RegexFlags::DOTALL));
        assert!(!merged.contains(RegexFlags::MULTILINE));
    }

    #[test]
    fn test_assert_num_lines() {
        assert_num_lines("one\ntwo\n", 2);
        assert_num_lines("", 0);
    }

    #[test]
    #[should_panic(expected = "Expected 3 lines")]
    fn test_assert_num_lines_failure() {
        assert_num_lines("one\n", 3);
    }
}
