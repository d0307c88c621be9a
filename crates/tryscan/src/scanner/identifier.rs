use alloc::string::String;
use core::{fmt, ops::Deref};

use super::{Class, Scanner};
use crate::scannable::Scannable;

impl Scanner {
    /// Consumes an ASCII identifier: a letter or `_`, then any number of
    /// letters, digits and `_`.
    ///
    /// ```rust
    /// use tryscan::Scanner;
    ///
    /// let mut scanner = Scanner::new("not_found_404 9lives");
    /// assert_eq!(scanner.scan_identifier().as_deref(), Some("not_found_404"));
    /// scanner.match_whitespace();
    /// assert_eq!(scanner.scan_identifier(), None);
    /// ```
    pub fn scan_identifier(&mut self) -> Option<String> {
        let mut identifier = String::from(self.eat_class(Class::IdentifierStart)?);
        while let Some(c) = self.eat_class(Class::IdentifierContinue) {
            identifier.push(c);
        }
        Some(identifier)
    }
}

/// An identifier scanned through the [`Scannable`] protocol.
///
/// Leading whitespace is skipped before the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(pub String);

impl Scannable for Identifier {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        scanner.match_whitespace();
        scanner.scan_identifier().map(Identifier)
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}
