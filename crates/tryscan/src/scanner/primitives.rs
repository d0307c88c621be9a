use alloc::string::String;

use super::Scanner;
use crate::{
    charset::CharSet,
    options::{Case, Precedence},
};

impl Scanner {
    /// Consumes one character if it belongs to `set`.
    pub fn match_char(&mut self, set: &CharSet) -> Option<char> {
        let c = self.cursor.peek()?;
        if set.contains(c) {
            self.cursor.advance();
            Some(c)
        } else {
            None
        }
    }

    /// Consumes the longest run of characters in `set`.
    ///
    /// Returns `None` if the next character is not in `set`.
    pub fn match_run(&mut self, set: &CharSet) -> Option<String> {
        let mut run = String::new();
        while let Some(c) = self.match_char(set) {
            run.push(c);
        }
        (!run.is_empty()).then_some(run)
    }

    /// Consumes characters up to, not including, the first one in `set` (or
    /// the end of input).
    ///
    /// Returns `None` if the cursor is already at a member of `set` or at the
    /// end.
    pub fn match_up_to(&mut self, set: &CharSet) -> Option<String> {
        let mut text = String::new();
        while let Some(c) = self.cursor.peek() {
            if set.contains(c) {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }
        (!text.is_empty()).then_some(text)
    }

    /// Consumes `text`, comparing characters according to `case`.
    ///
    /// A literal ending in a letter does not match when the input continues
    /// with another letter, so `"key"` does not match the start of
    /// `"keyword"`. The empty literal never matches.
    ///
    /// On success the literal itself is returned, not the input text it
    /// matched (they differ only under [`Case::Insensitive`]).
    ///
    /// ```rust
    /// use tryscan::{Case, Scanner};
    ///
    /// let mut scanner = Scanner::new("keyword");
    /// assert_eq!(scanner.match_literal("key", Case::Sensitive), None);
    /// assert_eq!(scanner.position(), 0);
    /// assert_eq!(scanner.match_literal("KEYWORD", Case::Insensitive), Some("KEYWORD"));
    /// assert_eq!(scanner.position(), 7);
    /// ```
    pub fn match_literal<'l>(&mut self, text: &'l str, case: Case) -> Option<&'l str> {
        let last = text.chars().next_back()?;
        self.attempt(|s| {
            for expected in text.chars() {
                let actual = s.cursor.next_char()?;
                if !case.chars_match(expected, actual) {
                    return None;
                }
            }
            if last.is_alphabetic() && s.cursor.peek().is_some_and(char::is_alphabetic) {
                return None;
            }
            Some(text)
        })
    }

    /// Tries each literal in order and returns the first that matches.
    pub fn match_any_literal<'l>(&mut self, texts: &[&'l str], case: Case) -> Option<&'l str> {
        texts.iter().copied().find_map(|text| self.match_literal(text, case))
    }

    /// Skips whitespace, then matches `text`. On failure the whitespace is
    /// left unconsumed as well.
    pub fn match_token<'l>(&mut self, text: &'l str, case: Case) -> Option<&'l str> {
        self.attempt(|s| {
            s.match_whitespace();
            s.match_literal(text, case)
        })
    }

    /// Skips whitespace, then matches the first of `texts` that fits.
    pub fn match_any_token<'l>(&mut self, texts: &[&'l str], case: Case) -> Option<&'l str> {
        self.attempt(|s| {
            s.match_whitespace();
            s.match_any_literal(texts, case)
        })
    }

    /// Matches one of the literals in `entries` and returns its value.
    ///
    /// Overlapping literals are resolved by
    /// [`ScannerOptions::precedence`](crate::ScannerOptions::precedence).
    ///
    /// ```rust
    /// use tryscan::{Case, Scanner};
    ///
    /// let mut scanner = Scanner::new("<=");
    /// let ops = [("<=", "le"), ("<", "lt")];
    /// assert_eq!(scanner.match_mapped(&ops, Case::Sensitive), Some("le"));
    /// ```
    pub fn match_mapped<V: Clone>(&mut self, entries: &[(&str, V)], case: Case) -> Option<V> {
        match self.options.precedence {
            Precedence::FirstListed => entries
                .iter()
                .find_map(|(text, value)| self.match_literal(text, case).map(|_| value.clone())),
            Precedence::LongestMatch => self.match_longest(entries, case),
        }
    }

    fn match_longest<V: Clone>(&mut self, entries: &[(&str, V)], case: Case) -> Option<V> {
        let start = self.save();
        let mut best = None;
        for (text, value) in entries {
            if self.match_literal(text, case).is_some() {
                let end = self.save();
                if best.as_ref().is_none_or(|(longest, _)| end > *longest) {
                    best = Some((end, value));
                }
                self.cursor.restore(start);
            }
        }
        let (end, value) = best?;
        self.cursor.restore(end);
        Some(value.clone())
    }

    /// Skips whitespace and returns how many characters were skipped.
    ///
    /// Always succeeds. Which characters count as whitespace depends on
    /// [`ScannerOptions::allow_unicode_whitespace`](crate::ScannerOptions::allow_unicode_whitespace).
    pub fn match_whitespace(&mut self) -> usize {
        let start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if !self.is_whitespace(c) {
                break;
            }
            self.cursor.advance();
        }
        self.cursor.position() - start
    }
}
