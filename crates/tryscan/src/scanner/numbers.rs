//! Digit-folding numeric parsers.
//!
//! Values are rebuilt one digit at a time through the contracts in
//! [`crate::number`]; nothing here calls `str::parse`. Integer literals that
//! overflow the target type fail like any other mismatch.

use super::{Class, Scanner};
use crate::{
    number::{Float, Integer, Signed, Unsigned, digit_value},
    options::Case,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

const SIGNS: [(&str, Sign); 2] = [("+", Sign::Plus), ("-", Sign::Minus)];

impl Scanner {
    /// Skips whitespace, then parses a run of decimal digits.
    ///
    /// ```rust
    /// use tryscan::Scanner;
    ///
    /// let mut scanner = Scanner::new("\t12345 300");
    /// assert_eq!(scanner.scan_unsigned::<u32>(), Some(12345));
    /// // 300 does not fit in a u8: nothing is consumed
    /// assert_eq!(scanner.scan_unsigned::<u8>(), None);
    /// assert_eq!(scanner.position(), 6);
    /// ```
    pub fn scan_unsigned<T: Unsigned>(&mut self) -> Option<T> {
        self.attempt(|s| {
            s.match_whitespace();
            s.fold_digits(Class::Decimal, 10, |value: T, d| value.fold(10, d))
        })
    }

    /// Skips whitespace, then parses an optionally signed run of decimal
    /// digits.
    ///
    /// A sign must be followed by at least one digit.
    pub fn scan_signed<T: Signed>(&mut self) -> Option<T> {
        self.attempt(|s| {
            s.match_whitespace();
            match s.match_sign() {
                Some(Sign::Minus) => s.fold_digits(Class::Decimal, 10, |value: T, d| {
                    value.fold_negative(10, d)
                }),
                Some(Sign::Plus) | None => {
                    s.fold_digits(Class::Decimal, 10, |value: T, d| value.fold(10, d))
                }
            }
        })
    }

    /// Parses a run of hexadecimal digits (`0-9a-fA-F`), without a prefix and
    /// without skipping whitespace.
    ///
    /// ```rust
    /// use tryscan::Scanner;
    ///
    /// let mut scanner = Scanner::new("1a2b3c");
    /// assert_eq!(scanner.scan_hexadecimal::<u32>(), Some(0x1a2b3c));
    /// ```
    pub fn scan_hexadecimal<T: Integer>(&mut self) -> Option<T> {
        self.fold_digits(Class::Hexadecimal, 16, |value: T, d| value.fold(16, d))
    }

    /// Skips whitespace, then parses a decimal floating-point literal.
    ///
    /// Accepted forms: `inf` / `nan` (any case), or
    /// `digits[.digits][(e|E)[+|-]digits]`. There is no leading sign, and an
    /// exponent marker without exponent digits fails the whole literal.
    ///
    /// The mantissa digits (integer and fractional) fold into one
    /// accumulator, which is then scaled by repeated multiplication or
    /// division by ten, once per unit of exponent.
    ///
    /// ```rust
    /// use tryscan::Scanner;
    ///
    /// let mut scanner = Scanner::new("1.25e+5 1e");
    /// assert_eq!(scanner.scan_float::<f64>(), Some(125000.0));
    /// assert_eq!(scanner.scan_float::<f64>(), None);
    /// assert_eq!(scanner.position(), 7);
    /// ```
    pub fn scan_float<T: Float>(&mut self) -> Option<T> {
        self.attempt(|s| {
            s.match_whitespace();
            let specials = [("inf", T::INFINITY), ("nan", T::NAN)];
            match s.match_mapped(&specials, Case::Insensitive) {
                Some(special) => Some(special),
                None => s.float_literal(),
            }
        })
    }

    /// The unsigned part of a float: mantissa, fraction and exponent.
    fn float_literal<T: Float>(&mut self) -> Option<T> {
        let first = self.eat_class(Class::Decimal)?;
        let mut mantissa = T::ZERO.fold_decimal(digit_value(first, 10));
        while let Some(c) = self.eat_class(Class::Decimal) {
            mantissa = mantissa.fold_decimal(digit_value(c, 10));
        }

        let mut exponent: i64 = 0;
        if self.match_literal(".", Case::Sensitive).is_some() {
            while let Some(c) = self.eat_class(Class::Decimal) {
                mantissa = mantissa.fold_decimal(digit_value(c, 10));
                exponent = exponent.saturating_sub(1);
            }
        }

        if self.match_literal("e", Case::Insensitive).is_some() {
            let negative = self.match_sign() == Some(Sign::Minus);
            let Some(magnitude) = self.decimal_exponent() else {
                tracing::trace!(position = self.position(), "exponent marker without digits");
                return None;
            };
            exponent = if negative {
                exponent.saturating_sub(magnitude)
            } else {
                exponent.saturating_add(magnitude)
            };
        }

        Some(scale(mantissa, exponent))
    }

    /// Exponent digits. Saturates instead of failing: any exponent this
    /// large already drives the mantissa to zero or infinity.
    fn decimal_exponent(&mut self) -> Option<i64> {
        let mut magnitude = i64::from(digit_value(self.eat_class(Class::Decimal)?, 10));
        while let Some(c) = self.eat_class(Class::Decimal) {
            magnitude = magnitude.saturating_mul(10).saturating_add(i64::from(digit_value(c, 10)));
        }
        Some(magnitude)
    }

    fn match_sign(&mut self) -> Option<Sign> {
        SIGNS
            .iter()
            .find_map(|&(text, sign)| self.match_literal(text, Case::Sensitive).map(|_| sign))
    }

    /// Consumes a maximal run from `class` and folds it with `step`.
    ///
    /// Fails without consuming anything if the run is empty or `step`
    /// overflows.
    fn fold_digits<T: Integer>(
        &mut self,
        class: Class,
        radix: u32,
        step: impl Fn(T, u8) -> Option<T>,
    ) -> Option<T> {
        self.attempt(|s| {
            let first = s.eat_class(class)?;
            let mut value = step(T::ZERO, digit_value(first, radix));
            while let Some(c) = s.eat_class(class) {
                value = value.and_then(|v| step(v, digit_value(c, radix)));
            }
            if value.is_none() {
                tracing::trace!(
                    position = s.position(),
                    target = core::any::type_name::<T>(),
                    "integer literal overflows target type"
                );
            }
            value
        })
    }
}

/// Multiplies or divides `mantissa` by ten, `|exponent|` times.
fn scale<T: Float>(mut mantissa: T, exponent: i64) -> T {
    for _ in 0..exponent.unsigned_abs() {
        if mantissa.is_saturated() {
            break;
        }
        mantissa = if exponent > 0 {
            mantissa.times_ten()
        } else {
            mantissa.div_ten()
        };
    }
    mantissa
}
