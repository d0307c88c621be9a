/// How [`Scanner::match_mapped`](crate::Scanner::match_mapped) chooses
/// between entries whose literals overlap (for example `"a"` and `"ab"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precedence {
    /// The first entry, in slice order, that matches wins.
    #[default]
    FirstListed,
    /// Every entry is tried and the one consuming the most characters wins.
    /// Ties go to the entry listed first.
    LongestMatch,
}

/// Case handling for literal matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Case {
    /// Characters must be identical.
    #[default]
    Sensitive,
    /// Characters are compared after lowercasing both sides.
    Insensitive,
}

impl Case {
    /// Whether the literal character `expected` accepts the input character
    /// `actual`.
    #[inline]
    pub fn chars_match(self, expected: char, actual: char) -> bool {
        match self {
            Case::Sensitive => expected == actual,
            Case::Insensitive => {
                expected == actual || expected.to_lowercase().eq(actual.to_lowercase())
            }
        }
    }
}

/// Configuration options for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use tryscan::{Precedence, Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     precedence: Precedence::LongestMatch,
///     ..Default::default()
/// };
/// let mut scanner = Scanner::with_options("abc", options);
/// assert_eq!(scanner.match_mapped(&[("a", 1), ("abc", 2)], Default::default()), Some(2));
/// ```
///
/// # Default
///
/// ASCII whitespace only, first-listed precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerOptions {
    /// Whether whitespace skipping accepts any Unicode whitespace.
    ///
    /// By default only space (U+0020), horizontal tab (U+0009), carriage
    /// return (U+000D) and line feed (U+000A) are skipped.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Resolution rule for overlapping keys in
    /// [`Scanner::match_mapped`](crate::Scanner::match_mapped).
    ///
    /// # Default
    ///
    /// [`Precedence::FirstListed`]
    pub precedence: Precedence,
}
