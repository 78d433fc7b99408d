//! # Decimal and Fixed-Width Conversions
//!
//! Base-10 text is the only textual format. Accepted input is an optional `+`
//! or `-` followed by one or more ASCII digits; the canonical output has no
//! `+`, no leading zeros, and a `-` only for negative values.
//!
//! Narrowing to `i64` / `u64` never truncates or saturates: a value outside the
//! target range is reported as [`BigIntError::Overflow`] (or
//! [`BigIntError::Negative`] for unsigned targets).

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::{BigInt, BigIntError, BigIntResult};

/// Check the literal against `[+-]?[0-9]+`
///
/// `num-bigint` alone would also accept `_` separators, which are not part of
/// the decimal format.
fn validate_decimal(input: &str) -> BigIntResult<()> {
    let digits = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BigIntError::Parse {
            input: input.to_string(),
        });
    }
    Ok(())
}

impl BigInt {
    /// Parse an optionally signed base-10 integer
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::from_string("100").unwrap();
    /// assert_eq!(x.to_string(), "100");
    ///
    /// assert_eq!(BigInt::from_string("+007").unwrap().to_string(), "7");
    /// assert!(BigInt::from_string("12a").is_err());
    /// ```
    pub fn from_string(input: &str) -> BigIntResult<BigInt> {
        validate_decimal(input)?;
        input
            .parse::<num_bigint::BigInt>()
            .map(BigInt::from)
            .map_err(|_| BigIntError::Parse {
                input: input.to_string(),
            })
    }

    /// Parse a literal that is known to be valid
    ///
    /// Use for constants fixed at build or configuration time. Input read at
    /// runtime belongs in [`BigInt::from_string`].
    ///
    /// # Panics
    ///
    /// Panics if `input` is not a valid decimal integer.
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::require_from_string("100");
    /// assert_eq!(x.to_string(), "100");
    /// ```
    pub fn require_from_string(input: &str) -> BigInt {
        match BigInt::from_string(input) {
            Ok(value) => value,
            Err(err) => panic!("require_from_string: {err}"),
        }
    }

    /// Narrow to `i64`
    ///
    /// # Examples
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from_i64(-100).to_i64().unwrap(), -100);
    ///
    /// let too_big = BigInt::from_u64(u64::MAX);
    /// assert_eq!(too_big.to_i64(), Err(BigIntError::Overflow { target: "i64" }));
    /// ```
    pub fn to_i64(&self) -> BigIntResult<i64> {
        self.inner()
            .to_i64()
            .ok_or(BigIntError::Overflow { target: "i64" })
    }

    /// Narrow to `u64`
    ///
    /// Negative values fail with [`BigIntError::Negative`] regardless of
    /// magnitude.
    pub fn to_u64(&self) -> BigIntResult<u64> {
        if self.is_negative() {
            return Err(BigIntError::Negative);
        }
        self.inner()
            .to_u64()
            .ok_or(BigIntError::Overflow { target: "u64" })
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_string(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    BigInt::from(num_bigint::BigInt::from(n))
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_u64()
    }
}
