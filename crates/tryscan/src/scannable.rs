//! Types that know how to read themselves from a [`Scanner`].
//!
//! Implementations only describe the happy path. [`Scanner::parse`] wraps
//! every call in a savepoint, so an implementation may consume input and
//! then return `None` without leaving the cursor moved.

use alloc::vec::Vec;
use core::any::type_name;

use crate::{ScanError, Scanner, options::Case};

/// A value that can be built from the text at the scanner's position.
///
/// ```rust
/// use tryscan::{Case, Scannable, Scanner};
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Scannable for Point {
///     fn try_parse(scanner: &mut Scanner) -> Option<Self> {
///         scanner.match_token("(", Case::Sensitive)?;
///         let x = scanner.parse()?;
///         scanner.match_token(",", Case::Sensitive)?;
///         let y = scanner.parse()?;
///         scanner.match_token(")", Case::Sensitive)?;
///         Some(Point { x, y })
///     }
/// }
///
/// let mut scanner = Scanner::new("(1, -2) (3, 4) (5,");
/// let points: Option<Vec<Point>> = scanner.parse_many();
/// assert_eq!(points, Some(vec![Point { x: 1, y: -2 }, Point { x: 3, y: 4 }]));
/// assert_eq!(scanner.remaining_text(), " (5,");
/// ```
pub trait Scannable: Sized {
    /// Reads one value, or returns `None` if the input does not hold one
    /// here. Call through [`Scanner::parse`] to get backtracking on failure.
    fn try_parse(scanner: &mut Scanner) -> Option<Self>;
}

impl Scanner {
    /// Parses a `T` at the current position, restoring the cursor if it is
    /// not there.
    pub fn parse<T: Scannable>(&mut self) -> Option<T> {
        self.attempt(T::try_parse)
    }

    /// Parses as many consecutive `T`s as possible.
    ///
    /// Stops at the first element that fails to parse, leaving the cursor
    /// just after the last success. Returns `None`, with the cursor
    /// untouched, if not even one element parses. An element that consumes
    /// no input ends the list after being collected.
    pub fn parse_many<T: Scannable>(&mut self) -> Option<Vec<T>> {
        let start = self.save();
        let mut last = start;
        let mut items = Vec::new();
        while let Some(item) = self.parse::<T>() {
            items.push(item);
            let here = self.save();
            if here == last {
                break;
            }
            last = here;
        }
        tracing::debug!(
            count = items.len(),
            position = last.position(),
            target = type_name::<T>(),
            "parsed repetition"
        );
        if items.is_empty() {
            self.restore(start);
            return None;
        }
        self.restore(last);
        Some(items)
    }

    /// Like [`parse`](Self::parse), but reports a missing value as a
    /// [`ScanError::NoMatch`].
    pub fn expect<T: Scannable>(&mut self) -> Result<T, ScanError> {
        self.parse().ok_or_else(|| {
            let error = ScanError::NoMatch {
                expected: type_name::<T>(),
                position: self.position(),
            };
            tracing::debug!(%error, "expected value not found");
            error
        })
    }
}

/// Parses the whole of `input` as a single `T`, allowing surrounding
/// whitespace.
///
/// ```rust
/// assert_eq!(tryscan::parse_str::<u16>("  8080\n"), Ok(8080));
/// assert!(tryscan::parse_str::<u16>("8080 tcp").is_err());
/// ```
pub fn parse_str<T: Scannable>(input: &str) -> Result<T, ScanError> {
    let mut scanner = Scanner::new(input);
    let value = scanner.expect()?;
    scanner.finish()?;
    Ok(value)
}

macro_rules! scannable_via {
    ($method:ident: $($t:ty),* $(,)?) => {$(
        impl Scannable for $t {
            #[inline]
            fn try_parse(scanner: &mut Scanner) -> Option<Self> {
                scanner.$method()
            }
        }
    )*};
}

scannable_via!(scan_unsigned: u8, u16, u32, u64, u128, usize);
scannable_via!(scan_signed: i8, i16, i32, i64, i128, isize);
scannable_via!(scan_float: f32, f64);

impl Scannable for bool {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        scanner.match_whitespace();
        scanner.match_mapped(&[("true", true), ("false", false)], Case::Insensitive)
    }
}

impl<T: Scannable> Scannable for Vec<T> {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        scanner.parse_many()
    }
}

/// Always succeeds: `Some` if a `T` parses here, `None` (consuming nothing)
/// otherwise.
impl<T: Scannable> Scannable for Option<T> {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        Some(scanner.parse())
    }
}

macro_rules! scannable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Scannable),+> Scannable for ($($name,)+) {
            fn try_parse(scanner: &mut Scanner) -> Option<Self> {
                Some(($(scanner.parse::<$name>()?,)+))
            }
        }
    };
}

scannable_tuple!(A, B);
scannable_tuple!(A, B, C);
scannable_tuple!(A, B, C, D);
