//! The backtracking scanner.
//!
//! Overview
//! - [`Scanner`] wraps a [`Cursor`] over the materialized input and exposes
//!   "try to consume" operations. Each one either advances and returns
//!   `Some(value)`, or returns `None` with the cursor exactly where it was.
//! - Compound matchers get that guarantee from [`Scanner::attempt`], which
//!   records a savepoint, runs the attempt, and restores on `None`. Matchers
//!   built from other matchers stay pure because every step underneath is
//!   either pure itself or runs inside an `attempt`.
//!
//! Layout
//! - `primitives`: characters, runs, literals, alternation, whitespace.
//! - `numbers`: digit-folding integer and floating-point parsers.
//! - `identifier`: `[A-Za-z_][A-Za-z0-9_]*`.
//! - The self-parsing protocol (`parse`, `parse_many`) lives in
//!   [`crate::scannable`].

mod identifier;
mod numbers;
mod primitives;


use alloc::string::String;

use bstr::ByteSlice;

pub use identifier::Identifier;

use crate::{
    ScanError,
    charset::CharSet,
    cursor::{Cursor, Savepoint},
    options::ScannerOptions,
};

/// The character classes the built-in parsers consult on every call.
///
/// Built once per scanner so numeric and identifier scanning do not rebuild
/// their sets for each token.
#[derive(Debug, Clone)]
struct Classes {
    decimal: CharSet,
    hexadecimal: CharSet,
    identifier_start: CharSet,
    identifier_continue: CharSet,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            decimal: CharSet::decimal_digits(),
            hexadecimal: CharSet::hexadecimal_digits(),
            identifier_start: CharSet::identifier_start(),
            identifier_continue: CharSet::identifier_continue(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Class {
    Decimal,
    Hexadecimal,
    IdentifierStart,
    IdentifierContinue,
}

/// A cursor over a fixed input with composable, backtracking matchers.
///
/// ```rust
/// use tryscan::{Case, Scanner};
///
/// let mut scanner = Scanner::new("JST 15:00");
/// let zones = [("JST", 9), ("EST", -5), ("GMT", 0)];
/// let offset = scanner.match_mapped(&zones, Case::Sensitive);
/// scanner.match_whitespace();
/// let hour: Option<i32> = scanner.scan_signed();
/// let colon = scanner.match_literal(":", Case::Sensitive);
/// let minute: Option<i32> = scanner.scan_signed();
/// assert_eq!((offset, hour, colon, minute), (Some(9), Some(15), Some(":"), Some(0)));
/// assert!(scanner.at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    cursor: Cursor,
    options: ScannerOptions,
    classes: Classes,
}

impl Scanner {
    /// Creates a scanner over `input` with default options.
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ScannerOptions::default())
    }

    /// Creates a scanner over `input` with the given options.
    pub fn with_options(input: &str, options: ScannerOptions) -> Self {
        Self::from_cursor(Cursor::new(input), options)
    }

    /// Creates a scanner over UTF-8 bytes, replacing invalid sequences with
    /// U+FFFD.
    pub fn from_utf8_lossy(bytes: &[u8], options: ScannerOptions) -> Self {
        Self::from_cursor(bytes.chars().collect(), options)
    }

    fn from_cursor(cursor: Cursor, options: ScannerOptions) -> Self {
        Self {
            cursor,
            options,
            classes: Classes::default(),
        }
    }

    /// The options this scanner was created with.
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Read-only view of the underlying cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Current offset, in characters.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Whether the whole input has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// The unread rest of the input.
    pub fn remaining_text(&self) -> String {
        self.cursor.rest()
    }

    /// The text consumed since `from`.
    pub fn text_since(&self, from: Savepoint) -> String {
        self.cursor.text_since(from)
    }

    /// Records the current position.
    #[inline]
    pub fn save(&self) -> Savepoint {
        self.cursor.save()
    }

    /// Moves the cursor back to `savepoint`.
    pub fn restore(&mut self, savepoint: Savepoint) {
        if savepoint.position() != self.cursor.position() {
            tracing::trace!(
                from = self.cursor.position(),
                to = savepoint.position(),
                "restoring savepoint"
            );
        }
        self.cursor.restore(savepoint);
    }

    /// Runs `f` and undoes everything it consumed if it returns `None`.
    ///
    /// This is the one place compound matchers get their backtracking from:
    /// inside `f`, steps may consume freely and bail out with `?`.
    ///
    /// ```rust
    /// use tryscan::{Case, Scanner};
    ///
    /// let mut scanner = Scanner::new("ab-");
    /// let pair = scanner.attempt(|s| {
    ///     let a = s.match_literal("ab", Case::Sensitive)?;
    ///     let b = s.match_literal("+", Case::Sensitive)?;
    ///     Some((a, b))
    /// });
    /// assert_eq!(pair, None);
    /// assert_eq!(scanner.position(), 0);
    /// ```
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let savepoint = self.save();
        let result = f(self);
        if result.is_none() {
            self.restore(savepoint);
        }
        result
    }

    /// Skips trailing whitespace and checks that nothing else is left.
    ///
    /// On error the cursor is left where it was before the call.
    pub fn finish(&mut self) -> Result<(), ScanError> {
        let savepoint = self.save();
        self.match_whitespace();
        if self.at_end() {
            Ok(())
        } else {
            let position = self.position();
            self.restore(savepoint);
            Err(ScanError::TrailingInput { position })
        }
    }

    fn class(&self, class: Class) -> &CharSet {
        match class {
            Class::Decimal => &self.classes.decimal,
            Class::Hexadecimal => &self.classes.hexadecimal,
            Class::IdentifierStart => &self.classes.identifier_start,
            Class::IdentifierContinue => &self.classes.identifier_continue,
        }
    }

    /// `match_char` against one of the cached classes.
    #[inline]
    fn eat_class(&mut self, class: Class) -> Option<char> {
        let c = self.cursor.peek()?;
        if self.class(class).contains(c) {
            self.cursor.advance();
            Some(c)
        } else {
            None
        }
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        if self.options.allow_unicode_whitespace {
            c.is_whitespace()
        } else {
            matches!(c, ' ' | '\t' | '\r' | '\n')
        }
    }
}

impl From<&str> for Scanner {
    fn from(input: &str) -> Self {
        Scanner::new(input)
    }
}
