//! # Persistence Driver Values
//!
//! Conversion to and from the scalar set a generic SQL driver binds and
//! scans. [`BigInt::value`] always produces decimal text, which every column
//! type able to hold the number accepts and which round-trips exactly.
//!
//! With the `postgres` or `sqlite` features the same rules are wired into
//! `postgres::types` and `rusqlite::types` directly.

use crate::{BigInt, BigIntError, BigIntResult};

/// Scalar values accepted at a database driver boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverValue {
    Int64(i64),
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

impl BigInt {
    /// Value to bind as a statement parameter
    ///
    /// # Examples
    /// ```
    /// use bigint::{BigInt, DriverValue};
    ///
    /// let x = BigInt::from_i64(10_000_000_000);
    /// assert_eq!(x.value().unwrap(), DriverValue::Text("10000000000".to_string()));
    /// ```
    pub fn value(&self) -> BigIntResult<DriverValue> {
        Ok(DriverValue::Text(self.to_string()))
    }

    /// Value for a native 64-bit integer column
    pub fn value_int64(&self) -> BigIntResult<DriverValue> {
        self.to_i64().map(DriverValue::Int64)
    }

    /// Read a value produced by a driver
    ///
    /// Integers are taken as-is; text and UTF-8 bytes must be decimal
    /// literals.
    ///
    /// # Examples
    /// ```
    /// use bigint::{BigInt, DriverValue};
    ///
    /// let x = BigInt::scan(&DriverValue::Text("-42".to_string())).unwrap();
    /// assert_eq!(x, BigInt::from_i64(-42));
    ///
    /// assert!(BigInt::scan(&DriverValue::Null).is_err());
    /// ```
    pub fn scan(value: &DriverValue) -> BigIntResult<BigInt> {
        match value {
            DriverValue::Int64(n) => Ok(BigInt::from_i64(*n)),
            DriverValue::Text(text) => BigInt::from_string(text),
            DriverValue::Bytes(raw) => {
                let text = std::str::from_utf8(raw).map_err(|_| {
                    BigIntError::UnsupportedDriverValue(format!("{} non-UTF-8 bytes", raw.len()))
                })?;
                BigInt::from_string(text)
            }
            DriverValue::Null => Err(BigIntError::Null),
        }
    }
}

impl From<&BigInt> for DriverValue {
    fn from(value: &BigInt) -> Self {
        DriverValue::Text(value.to_string())
    }
}

impl TryFrom<&DriverValue> for BigInt {
    type Error = BigIntError;

    fn try_from(value: &DriverValue) -> Result<Self, Self::Error> {
        BigInt::scan(value)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use std::error::Error;

    use bytes::BytesMut;
    use postgres::types::{to_sql_checked, FromSql, IsNull, ToSql, Type};

    use crate::{BigInt, BigIntError};

    impl ToSql for BigInt {
        fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match *ty {
                Type::INT2 => i16::try_from(self.to_i64()?)
                    .map_err(|_| BigIntError::Overflow { target: "i16" })?
                    .to_sql(ty, out),
                Type::INT4 => i32::try_from(self.to_i64()?)
                    .map_err(|_| BigIntError::Overflow { target: "i32" })?
                    .to_sql(ty, out),
                Type::INT8 => self.to_i64()?.to_sql(ty, out),
                _ => self.to_string().to_sql(ty, out),
            }
        }

        fn accepts(ty: &Type) -> bool {
            matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
        }

        to_sql_checked!();
    }

    impl<'a> FromSql<'a> for BigInt {
        fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
            match *ty {
                Type::INT2 => Ok(BigInt::from_i64(i16::from_sql(ty, raw)?.into())),
                Type::INT4 => Ok(BigInt::from_i64(i32::from_sql(ty, raw)?.into())),
                Type::INT8 => Ok(BigInt::from_i64(i64::from_sql(ty, raw)?)),
                _ => Ok(BigInt::from_string(<&str>::from_sql(ty, raw)?)?),
            }
        }

        fn accepts(ty: &Type) -> bool {
            matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn encode(value: &BigInt, ty: &Type) -> Result<BytesMut, BigIntError> {
            let mut out = BytesMut::new();
            match value.to_sql(ty, &mut out) {
                Ok(IsNull::No) => Ok(out),
                Ok(IsNull::Yes) => panic!("BigInt encoded as NULL"),
                Err(err) => Err(err
                    .downcast_ref::<BigIntError>()
                    .cloned()
                    .unwrap_or_else(|| panic!("unexpected error: {err}"))),
            }
        }

        #[test]
        fn test_int8_column() {
            let value = BigInt::from_i64(-9_000_000_000);
            let raw = encode(&value, &Type::INT8).unwrap();

            assert_eq!(&raw[..], &(-9_000_000_000i64).to_be_bytes()[..]);
            assert_eq!(BigInt::from_sql(&Type::INT8, &raw).unwrap(), value);

            let wide = BigInt::from_string("123456789012345678901234567890").unwrap();
            assert_eq!(encode(&wide, &Type::INT8), Err(BigIntError::Overflow { target: "i64" }));
        }

        #[test]
        fn test_int2_column() {
            let value = BigInt::from_i64(300);
            let raw = encode(&value, &Type::INT2).unwrap();

            assert_eq!(&raw[..], &300i16.to_be_bytes()[..]);
            assert_eq!(BigInt::from_sql(&Type::INT2, &raw).unwrap(), value);

            // Overflow detection
            assert_eq!(
                encode(&BigInt::from_i64(40_000), &Type::INT2),
                Err(BigIntError::Overflow { target: "i16" })
            );
        }

        #[test]
        fn test_text_column() {
            let wide = BigInt::from_string("-123456789012345678901234567890").unwrap();
            let raw = encode(&wide, &Type::TEXT).unwrap();

            assert_eq!(&raw[..], b"-123456789012345678901234567890");
            assert_eq!(BigInt::from_sql(&Type::TEXT, &raw).unwrap(), wide);

            let err = BigInt::from_sql(&Type::TEXT, b"12x").unwrap_err();
            assert!(matches!(
                err.downcast_ref::<BigIntError>(),
                Some(BigIntError::Parse { .. })
            ));
        }

        #[test]
        fn test_accepts() {
            assert!(<BigInt as ToSql>::accepts(&Type::INT4));
            assert!(<BigInt as FromSql>::accepts(&Type::VARCHAR));
            assert!(!<BigInt as ToSql>::accepts(&Type::FLOAT8));
            assert!(!<BigInt as FromSql>::accepts(&Type::BOOL));
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    use crate::BigInt;

    impl ToSql for BigInt {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::from(self.to_string()))
        }
    }

    impl FromSql for BigInt {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            match value {
                ValueRef::Integer(n) => Ok(BigInt::from_i64(n)),
                ValueRef::Text(raw) => {
                    let text = std::str::from_utf8(raw).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                    BigInt::from_string(text).map_err(|e| FromSqlError::Other(Box::new(e)))
                }
                _ => Err(FromSqlError::InvalidType),
            }
        }
    }

}
