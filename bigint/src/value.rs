//! # BigInt Value Type
//!
//! The immutable wrapper itself: construction from fixed-width integers or an
//! existing `num_bigint::BigInt`, the total order, and the sign predicates.
//!
//! The wrapped integer is never exposed by reference. Callers that need the
//! underlying representation get their own copy through [`BigInt::to_big_int`].

use std::cmp::Ordering;

use num_bigint::Sign;
use num_traits::{One, Zero};

/// Immutable arbitrary-precision signed integer
///
/// # Examples
/// ```
/// use bigint::BigInt;
///
/// let x = BigInt::from_i64(-42);
/// assert!(x.is_negative());
/// assert_eq!(x.to_string(), "-42");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(num_bigint::BigInt);

impl BigInt {
    /// The value zero
    pub fn zero() -> Self {
        Self(num_bigint::BigInt::zero())
    }

    /// The value one
    pub fn one() -> Self {
        Self(num_bigint::BigInt::one())
    }

    /// Wrap a signed 64-bit integer exactly
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::from_i64(100_000_000);
    /// assert_eq!(x.to_i64().unwrap(), 100_000_000);
    /// ```
    pub fn from_i64(n: i64) -> Self {
        Self(num_bigint::BigInt::from(n))
    }

    /// Wrap an unsigned 64-bit integer exactly
    pub fn from_u64(n: u64) -> Self {
        Self(num_bigint::BigInt::from(n))
    }

    /// Adopt a copy of an existing arbitrary-precision integer
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let source = num_bigint::BigInt::from(100);
    /// let x = BigInt::from_big_int(&source);
    /// assert_eq!(x, BigInt::from_i64(100));
    /// ```
    pub fn from_big_int(value: &num_bigint::BigInt) -> Self {
        Self(value.clone())
    }

    /// Copy of the underlying `num_bigint::BigInt`
    pub fn to_big_int(&self) -> num_bigint::BigInt {
        self.0.clone()
    }

    /// Borrow the representation for arithmetic within the crate
    pub(crate) fn inner(&self) -> &num_bigint::BigInt {
        &self.0
    }

    /// Compare two values
    ///
    /// Returns `-1` if `self < other`, `0` if equal and `1` if `self > other`.
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from_i64(100);
    /// let b = BigInt::from_i64(200);
    /// assert_eq!(a.compare(&b), -1);
    /// assert_eq!(b.compare(&a), 1);
    /// assert_eq!(a.compare(&a), 0);
    /// ```
    pub fn compare(&self, other: &BigInt) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// `true` when both values are numerically equal
    pub fn equal(&self, other: &BigInt) -> bool {
        self.compare(other) == 0
    }

    /// `true` when `self > other`
    pub fn greater_than(&self, other: &BigInt) -> bool {
        self.compare(other) > 0
    }

    /// `true` when `self >= other`
    pub fn greater_than_or_equal(&self, other: &BigInt) -> bool {
        self.compare(other) >= 0
    }

    /// `true` when `self < other`
    pub fn less_than(&self, other: &BigInt) -> bool {
        self.compare(other) < 0
    }

    /// `true` when `self <= other`
    pub fn less_than_or_equal(&self, other: &BigInt) -> bool {
        self.compare(other) <= 0
    }

    /// `true` when the value is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    /// `true` when the value is strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// `true` when the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(value: num_bigint::BigInt) -> Self {
        Self(value)
    }
}

impl From<&num_bigint::BigInt> for BigInt {
    fn from(value: &num_bigint::BigInt) -> Self {
        Self::from_big_int(value)
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(value: BigInt) -> Self {
        value.0
    }
}
