use crate::{Error, Result, Value};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::any;
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// representation that backs parameter binding and row decoding.
///
/// The set of implementations is the static type to storage type mapping:
/// every implementor declares its canonical `Value` variant through
/// `as_empty_value`. Values of an unmapped type are carried explicitly as
/// [`Value::Variant`].
///
/// `try_from_value` accepts the canonical variant and, for numeric types,
/// alternate widths with range checks. It returns an error naming both the
/// offending value and the requested type on mismatch.
pub trait AsValue {
    /// The typed NULL for this type. Used to represent absent optional data.
    fn as_empty_value() -> Value;
    /// Convert into the owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

macro_rules! out_of_range {
    ($value:expr, $target:ty) => {
        Error::msg(format!(
            "Value {} is out of range for {}",
            $value,
            any::type_name::<$target>(),
        ))
    };
}

macro_rules! impl_as_value {
    ($source:ty, $variant:path $(, $pat:pat => $expr:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $variant(None)
            }
            fn as_value(self) -> Value {
                $variant(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $variant(Some(v)) => Ok(v),
                    $($pat => $expr,)*
                    other => Err(Error::msg(format!(
                        "Cannot convert {other:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(
    bool, Value::Boolean,
    Value::UInt8(Some(v)) => Ok(v != 0),
    Value::Int16(Some(v)) => Ok(v != 0),
    Value::Int32(Some(v)) => Ok(v != 0),
    Value::Int64(Some(v)) => Ok(v != 0),
);
impl_as_value!(
    u8, Value::UInt8,
    Value::Int16(Some(v)) => u8::try_from(v).map_err(|_| out_of_range!(v, u8)),
    Value::Int32(Some(v)) => u8::try_from(v).map_err(|_| out_of_range!(v, u8)),
    Value::Int64(Some(v)) => u8::try_from(v).map_err(|_| out_of_range!(v, u8)),
);
impl_as_value!(
    i16, Value::Int16,
    Value::UInt8(Some(v)) => Ok(v.into()),
    Value::Int32(Some(v)) => i16::try_from(v).map_err(|_| out_of_range!(v, i16)),
    Value::Int64(Some(v)) => i16::try_from(v).map_err(|_| out_of_range!(v, i16)),
);
impl_as_value!(
    i32, Value::Int32,
    Value::UInt8(Some(v)) => Ok(v.into()),
    Value::Int16(Some(v)) => Ok(v.into()),
    Value::Int64(Some(v)) => i32::try_from(v).map_err(|_| out_of_range!(v, i32)),
);
impl_as_value!(
    i64, Value::Int64,
    Value::UInt8(Some(v)) => Ok(v.into()),
    Value::Int16(Some(v)) => Ok(v.into()),
    Value::Int32(Some(v)) => Ok(v.into()),
);
impl_as_value!(
    f32, Value::Float32,
    Value::Float64(Some(v)) => Ok(v as f32),
);
impl_as_value!(
    f64, Value::Float64,
    Value::Float32(Some(v)) => Ok(v.into()),
);
impl_as_value!(
    Decimal, Value::Decimal,
    Value::UInt8(Some(v)) => Ok(v.into()),
    Value::Int16(Some(v)) => Ok(v.into()),
    Value::Int32(Some(v)) => Ok(v.into()),
    Value::Int64(Some(v)) => Ok(v.into()),
    Value::Float64(Some(v)) => {
        Decimal::from_f64(v).ok_or_else(|| out_of_range!(v, Decimal))
    },
);
impl_as_value!(
    String, Value::Varchar,
    Value::Variant(Some(v)) => Ok(v),
);
impl_as_value!(Box<[u8]>, Value::Blob);
impl_as_value!(Date, Value::Date);
impl_as_value!(Time, Value::Time);
impl_as_value!(PrimitiveDateTime, Value::Timestamp);
impl_as_value!(
    Uuid, Value::Uuid,
    Value::Varchar(Some(v)) => Uuid::parse_str(&v).map_err(|e| {
        Error::new(e).context(format!("Cannot read `{v}` as a uuid"))
    }),
);

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v.into_vec()),
            other => Err(Error::msg(format!(
                "Cannot convert {other:?} to {}",
                any::type_name::<Self>(),
            ))),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::try_from_value(value).map(Some)
        }
    }
}
