//! # Big Integer Arithmetic Operations
//!
//! Exact arithmetic over [`BigInt`]. Operands are never modified; every
//! operation yields a fresh value.
//!
//! - `+`, `-`, `*` and unary `-` are implemented for owned and borrowed operands
//! - Division and remainder truncate toward zero. The checked forms report a
//!   zero divisor as [`BigIntError::DivisionByZero`], the `/` and `%` operators
//!   panic like the primitive integers do
//! - [`BigInt::pow`] clamps negative exponents to zero, so the result is `1`

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{Signed, ToPrimitive};

use crate::{BigInt, BigIntError, BigIntResult};

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::from(self.inner().$method(rhs.inner()))
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $trait<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                <&BigInt as $trait<&BigInt>>::$method(&self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $trait<&BigInt>>::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from(-self.inner())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

impl BigInt {
    /// Truncating division
    ///
    /// The quotient is rounded toward zero.
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let q = BigInt::from_i64(-7).checked_div(&BigInt::from_i64(2)).unwrap();
    /// assert_eq!(q, BigInt::from_i64(-3));
    ///
    /// assert!(BigInt::one().checked_div(&BigInt::zero()).is_err());
    /// ```
    pub fn checked_div(&self, other: &BigInt) -> BigIntResult<BigInt> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self / other)
    }

    /// Remainder of truncating division, carrying the sign of `self`
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let r = BigInt::from_i64(-7).checked_rem(&BigInt::from_i64(2)).unwrap();
    /// assert_eq!(r, BigInt::from_i64(-1));
    /// ```
    pub fn checked_rem(&self, other: &BigInt) -> BigIntResult<BigInt> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self % other)
    }

    /// Additive inverse
    pub fn negated(&self) -> BigInt {
        -self
    }

    /// Magnitude of the value
    pub fn abs(&self) -> BigInt {
        BigInt::from(self.inner().abs())
    }

    /// `-1`, `0` or `1` according to the sign
    pub fn signum(&self) -> BigInt {
        BigInt::from(self.inner().signum())
    }

    /// Integer exponentiation
    ///
    /// A negative exponent is clamped to zero and yields `1` for every base,
    /// zero included. Bases `0`, `1` and `-1` are answered for any exponent.
    /// Any other base with an exponent above `u32::MAX` has no representable
    /// result and fails with [`BigIntError::Overflow`].
    ///
    /// Below that limit the result is always computed, and time and memory
    /// grow with `exponent * log2(|self|)` bits: `2^4_000_000_000` needs
    /// about 500 MB. Callers taking exponents from untrusted input should
    /// bound them first.
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let ten = BigInt::from_i64(10);
    /// assert_eq!(ten.pow(&BigInt::from_i64(6)).unwrap(), BigInt::from_i64(1_000_000));
    /// assert_eq!(ten.pow(&BigInt::from_i64(-5)).unwrap(), BigInt::one());
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> BigIntResult<BigInt> {
        if !exponent.is_positive() {
            return Ok(BigInt::one());
        }
        if self.is_zero() || *self == BigInt::one() {
            return Ok(self.clone());
        }
        if *self == BigInt::from_i64(-1) {
            let odd = exponent.inner().bit(0);
            return Ok(if odd { self.clone() } else { BigInt::one() });
        }

        let exponent = exponent
            .inner()
            .to_u32()
            .ok_or(BigIntError::Overflow { target: "u32 exponent" })?;
        Ok(BigInt::from(self.inner().pow(exponent)))
    }
}
