//! A backtracking character scanner for hand-written lexers and parsers.
//!
//! A [`Scanner`] owns its input and a cursor. Every matcher either consumes
//! input and returns `Some(value)`, or returns `None` and leaves the cursor
//! exactly where it was, so alternatives compose with plain `if let` and
//! `?` chains instead of a separate tokenizer pass.
//!
//! ```rust
//! use tryscan::{Case, Scanner};
//!
//! let mut scanner = Scanner::new("width = 0x1F4 # pixels");
//! let key = scanner.scan_identifier();
//! scanner.match_token("=", Case::Sensitive);
//! scanner.match_whitespace();
//! scanner.match_literal("0x", Case::Insensitive);
//! let value: Option<u32> = scanner.scan_hexadecimal();
//! assert_eq!(key.as_deref(), Some("width"));
//! assert_eq!(value, Some(500));
//! ```
//!
//! Numeric parsers rebuild values digit by digit through the traits in
//! [`number`], and any type can join in by implementing [`Scannable`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod charset;
mod cursor;
mod error;
pub mod number;
mod options;
mod scannable;
mod scanner;

#[cfg(test)]
mod tests;

pub use charset::CharSet;
pub use cursor::{Cursor, Savepoint};
pub use error::ScanError;
pub use options::{Case, Precedence, ScannerOptions};
pub use scannable::{Scannable, parse_str};
pub use scanner::{Identifier, Scanner};
