//! Character sets used to drive the single-character and run matchers.

use alloc::collections::BTreeSet;
use core::ops::{BitOr, Sub};

const LOWERCASE_ASCII: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_ASCII: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DECIMAL_DIGITS: &str = "0123456789";
const HEXADECIMAL_DIGITS: &str = "0123456789abcdefABCDEF";
const WHITESPACE: &str = " \t\r\n";

/// A set of characters with value semantics.
///
/// Copies are independent: [`union`](Self::union) and
/// [`subtract`](Self::subtract) return new sets, and the in-place
/// [`add`](Self::add) / [`remove`](Self::remove) only touch the receiver.
///
/// ```rust
/// use tryscan::CharSet;
///
/// let vowels = CharSet::from_chars("aeiou");
/// let letters = CharSet::lowercase_ascii();
/// let consonants = &letters - &vowels;
/// assert!(consonants.contains('k'));
/// assert!(!consonants.contains('e'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set containing every character of `s`.
    pub fn from_chars(s: &str) -> Self {
        s.chars().collect()
    }

    /// `0-9`.
    pub fn decimal_digits() -> Self {
        Self::from_chars(DECIMAL_DIGITS)
    }

    /// `0-9`, `a-f` and `A-F`.
    pub fn hexadecimal_digits() -> Self {
        Self::from_chars(HEXADECIMAL_DIGITS)
    }

    /// `a-z`.
    pub fn lowercase_ascii() -> Self {
        Self::from_chars(LOWERCASE_ASCII)
    }

    /// `A-Z`.
    pub fn uppercase_ascii() -> Self {
        Self::from_chars(UPPERCASE_ASCII)
    }

    /// Space, horizontal tab, carriage return and line feed.
    pub fn whitespace() -> Self {
        Self::from_chars(WHITESPACE)
    }

    /// Characters that may begin an identifier: ASCII letters and `_`.
    pub fn identifier_start() -> Self {
        let mut set = Self::lowercase_ascii().union(&Self::uppercase_ascii());
        set.chars.insert('_');
        set
    }

    /// Characters that may follow the first one in an identifier: ASCII
    /// letters, digits and `_`.
    pub fn identifier_continue() -> Self {
        Self::identifier_start().union(&Self::decimal_digits())
    }

    /// Whether `c` is a member of the set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct characters in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns a new set with the members of both sets.
    #[must_use]
    pub fn union(&self, other: &CharSet) -> CharSet {
        self.chars.union(&other.chars).copied().collect()
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    #[must_use]
    pub fn subtract(&self, other: &CharSet) -> CharSet {
        self.chars.difference(&other.chars).copied().collect()
    }

    /// Adds the members of `other` to this set.
    pub fn add(&mut self, other: &CharSet) {
        self.chars.extend(other.chars.iter().copied());
    }

    /// Removes the members of `other` from this set.
    pub fn remove(&mut self, other: &CharSet) {
        self.chars.retain(|c| !other.chars.contains(c));
    }

    /// Iterates the members in codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl From<&str> for CharSet {
    fn from(s: &str) -> Self {
        Self::from_chars(s)
    }
}

impl BitOr for &CharSet {
    type Output = CharSet;

    fn bitor(self, rhs: &CharSet) -> CharSet {
        self.union(rhs)
    }
}

impl Sub for &CharSet {
    type Output = CharSet;

    fn sub(self, rhs: &CharSet) -> CharSet {
        self.subtract(rhs)
    }
}
