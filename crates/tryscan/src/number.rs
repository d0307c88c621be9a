//! Numeric contracts shared by the digit-folding parsers.
//!
//! Every numeric parser in the scanner reconstructs its value one digit at a
//! time instead of handing a slice to `str::parse`. The traits here are the
//! small arithmetic surface that folding needs, so one algorithm serves every
//! integer width and both float precisions.
//!
//! Integer folding is checked: a literal that does not fit the target type
//! yields `None` from [`Integer::fold`], which the scanner reports as a
//! failed match.

use core::fmt::Debug;

/// Arithmetic needed to accumulate digits in a given radix.
pub trait Integer: Copy + Debug + PartialEq {
    /// The additive identity.
    const ZERO: Self;

    /// Returns `self * radix + digit`, or `None` on overflow.
    fn fold(self, radix: u8, digit: u8) -> Option<Self>;
}

/// Integers parsed without a sign.
pub trait Unsigned: Integer {}

/// Integers that accept a leading `+` or `-`.
pub trait Signed: Integer {
    /// Returns `self * radix - digit`, or `None` on overflow.
    ///
    /// Negative literals accumulate downwards so that the minimum value of
    /// the type (whose magnitude has no positive counterpart) still parses.
    fn fold_negative(self, radix: u8, digit: u8) -> Option<Self>;
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Integer for $t {
            const ZERO: Self = 0;

            #[inline]
            fn fold(self, radix: u8, digit: u8) -> Option<Self> {
                self.checked_mul(<$t>::from(radix))?
                    .checked_add(<$t>::from(digit))
            }
        }

        impl Unsigned for $t {}
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Integer for $t {
            const ZERO: Self = 0;

            #[inline]
            fn fold(self, radix: u8, digit: u8) -> Option<Self> {
                self.checked_mul(<$t>::from(radix))?
                    .checked_add(<$t>::from(digit))
            }
        }

        impl Signed for $t {
            #[inline]
            fn fold_negative(self, radix: u8, digit: u8) -> Option<Self> {
                self.checked_mul(<$t>::from(radix))?
                    .checked_sub(<$t>::from(digit))
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i16, i32, i64, i128, isize);

// `i8: From<u8>` does not exist, so the narrowest signed type goes through
// `i8::try_from`. Radix and digit are at most 16 and 15, both of which fit.
impl Integer for i8 {
    const ZERO: Self = 0;

    #[inline]
    fn fold(self, radix: u8, digit: u8) -> Option<Self> {
        self.checked_mul(i8::try_from(radix).ok()?)?
            .checked_add(i8::try_from(digit).ok()?)
    }
}

impl Signed for i8 {
    #[inline]
    fn fold_negative(self, radix: u8, digit: u8) -> Option<Self> {
        self.checked_mul(i8::try_from(radix).ok()?)?
            .checked_sub(i8::try_from(digit).ok()?)
    }
}

/// Floating-point arithmetic for mantissa folding and decimal scaling.
pub trait Float: Copy + Debug + PartialEq {
    /// `0.0`.
    const ZERO: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// A quiet NaN.
    const NAN: Self;

    /// Returns `self * 10 + digit`.
    fn fold_decimal(self, digit: u8) -> Self;

    /// Returns `self * 10`.
    fn times_ten(self) -> Self;

    /// Returns `self / 10`.
    fn div_ten(self) -> Self;

    /// Whether further scaling by ten can no longer change the value
    /// (zero, infinite, or NaN).
    fn is_saturated(self) -> bool;
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Float for $t {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$t>::INFINITY;
            const NAN: Self = <$t>::NAN;

            #[inline]
            fn fold_decimal(self, digit: u8) -> Self {
                self * 10.0 + <$t>::from(digit)
            }

            #[inline]
            fn times_ten(self) -> Self {
                self * 10.0
            }

            #[inline]
            fn div_ten(self) -> Self {
                self / 10.0
            }

            #[inline]
            fn is_saturated(self) -> bool {
                self == 0.0 || !self.is_finite()
            }
        }
    )*};
}

impl_float!(f32, f64);

/// Returns the value of `c` as a digit in `radix`.
///
/// Callers only pass characters that already matched the digit set for
/// `radix`; anything else is a bug in the scanner itself.
#[inline]
pub(crate) fn digit_value(c: char, radix: u32) -> u8 {
    match c.to_digit(radix) {
        // to_digit never returns more than 35
        #[allow(clippy::cast_possible_truncation)]
        Some(d) => d as u8,
        None => unreachable!("{c:?} matched the radix-{radix} digit set but has no digit value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_fold_detects_overflow() {
        assert_eq!(25u8.fold(10, 5), Some(255));
        assert_eq!(25u8.fold(10, 6), None);
        assert_eq!(26u8.fold(10, 0), None);
        assert_eq!(0xfu8.fold(16, 0xf), Some(0xff));
    }

    #[test]
    fn signed_folds_reach_both_extremes() {
        assert_eq!(12i8.fold(10, 7), Some(127));
        assert_eq!(12i8.fold(10, 8), None);
        assert_eq!((-12i8).fold_negative(10, 8), Some(-128));
        assert_eq!((-12i8).fold_negative(10, 9), None);
        assert_eq!((-922_337_203_685_477_580i64).fold_negative(10, 8), Some(i64::MIN));
    }

    #[test]
    fn float_scaling_saturates() {
        assert!(f64::INFINITY.is_saturated());
        assert!(0.0f64.is_saturated());
        assert!(f32::NAN.is_saturated());
        assert!(!1.5f32.is_saturated());
        assert_eq!(1.5f64.times_ten().div_ten(), 1.5);
        assert_eq!(12.0f32.fold_decimal(3), 123.0);
    }

    #[test]
    fn digit_values() {
        assert_eq!(digit_value('7', 10), 7);
        assert_eq!(digit_value('a', 16), 10);
        assert_eq!(digit_value('F', 16), 15);
    }

    #[test]
    #[should_panic(expected = "has no digit value")]
    fn digit_value_rejects_non_digits() {
        let _ = digit_value('g', 16);
    }
}
