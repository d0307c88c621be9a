//! Position bookkeeping over a fully materialized character sequence.
//!
//! Positions count `char`s, not bytes. The cursor never moves past the end of
//! the input and only moves backwards through [`Cursor::restore`].

use alloc::{string::String, vec::Vec};

/// A recorded cursor position.
///
/// Obtained from [`Cursor::save`] (or [`Scanner::save`](crate::Scanner::save))
/// and handed back to `restore` to undo a failed multi-step match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Savepoint(usize);

impl Savepoint {
    /// The character offset this savepoint records.
    pub fn position(self) -> usize {
        self.0
    }
}

/// Owns the input characters and the current read position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Creates a cursor at position 0.
    pub fn new(input: &str) -> Self {
        input.chars().collect()
    }

    /// Current offset in characters.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of characters in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of characters left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// Whether every character has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character at the cursor, if any.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Moves one character forward. Does nothing at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Returns the character at the cursor and moves past it.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Records the current position.
    #[inline]
    pub fn save(&self) -> Savepoint {
        Savepoint(self.pos)
    }

    /// Moves the cursor back to `savepoint`.
    ///
    /// A savepoint taken from a longer input is clamped to this input's end.
    #[inline]
    pub fn restore(&mut self, savepoint: Savepoint) {
        self.pos = savepoint.0.min(self.chars.len());
    }

    /// The text between `from` and the current position.
    ///
    /// Empty when `from` lies at or after the cursor.
    pub fn text_since(&self, from: Savepoint) -> String {
        let start = from.0.min(self.pos);
        self.chars[start..self.pos].iter().collect()
    }

    /// The unread rest of the input.
    pub fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }
}

impl FromIterator<char> for Cursor {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
            pos: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_advance() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.peek(), Some('a'));
        assert!(!c.at_end());
        c.advance();
        assert_eq!(c.next_char(), Some('b'));
        assert!(c.at_end());
        assert_eq!(c.next_char(), None);
        c.advance();
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn positions_count_chars_not_bytes() {
        let mut c = Cursor::new("é漢x");
        assert_eq!(c.len(), 3);
        c.advance();
        c.advance();
        assert_eq!(c.peek(), Some('x'));
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn save_and_restore() {
        let mut c = Cursor::new("12345");
        c.advance();
        c.advance();
        let mark = c.save();
        while c.next_char().is_some() {}
        assert!(c.at_end());
        assert_eq!(c.text_since(mark), "345");
        c.restore(mark);
        assert_eq!(c.position(), 2);
        assert_eq!(c.rest(), "345");
    }

    #[test]
    fn restore_clamps_foreign_savepoints() {
        let mut long = Cursor::new("abcdef");
        for _ in 0..6 {
            long.advance();
        }
        let mut short = Cursor::new("ab");
        short.restore(long.save());
        assert_eq!(short.position(), 2);
        assert!(short.at_end());
    }

    #[test]
    fn empty_input() {
        let c = Cursor::new("");
        assert!(c.is_empty());
        assert!(c.at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.text_since(c.save()), "");
    }
}
