//! # BigInt
//!
//! Immutable arbitrary-precision signed integers backed by `num-bigint`.
//! Every operation returns a new value; nothing mutates its receiver.
//!
//! ## Key Features
//!
//! - **Exact arithmetic** with no fixed bit width
//! - **Total order** with `-1 / 0 / 1` comparison and named predicates
//! - **Decimal text** as the only textual format
//! - **Checked narrowing** to `i64` / `u64` (errors, never truncates)
//! - **Driver hook** producing values a SQL driver can bind
//!
//! ## Example
//!
//! ```rust
//! use bigint::BigInt;
//!
//! let a = BigInt::from_i64(100);
//! let b = BigInt::from_string("200").unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "300");
//! assert_eq!(b.checked_div(&a).unwrap(), BigInt::from_i64(2));
//! assert_eq!(a.compare(&b), -1);
//! ```

pub mod arithmetic;
pub mod conversions;
pub mod driver;
#[cfg(feature = "serde")]
pub mod serialization;
pub mod value;

pub use driver::*;
pub use value::*;

/// Core error type for big integer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// Input is not an optionally signed base-10 integer literal
    #[error("invalid integer literal: {input:?}")]
    Parse { input: String },
    /// Division or remainder by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Value does not fit the requested representation
    #[error("value out of range for {target}")]
    Overflow { target: &'static str },
    /// Value is negative (when unsigned type required)
    #[error("negative value where unsigned required")]
    Negative,
    /// SQL NULL scanned into a non-nullable integer
    #[error("cannot scan NULL into BigInt")]
    Null,
    /// Driver value that carries no integer meaning
    #[error("unsupported driver value: {0}")]
    UnsupportedDriverValue(String),
}

/// Result type alias for big integer operations
pub type BigIntResult<T> = Result<T, BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BigIntError::Parse { input: "12a".to_string() };
        assert_eq!(err.to_string(), "invalid integer literal: \"12a\"");

        assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            BigIntError::Overflow { target: "i64" }.to_string(),
            "value out of range for i64"
        );
    }

    #[test]
    fn test_value_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInt>();
        assert_send_sync::<BigIntError>();
    }
}
