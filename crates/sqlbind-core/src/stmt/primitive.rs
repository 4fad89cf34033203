use super::Value;
use crate::{schema::record::FieldKind, Error, Result};

/// A Rust type that can be stored in a single column.
///
/// `KIND` and `NULLABLE` describe the field to the type compatibility
/// checker; `load` and `to_value` move values between the record and the
/// driver.
pub trait Primitive: Sized {
    const KIND: FieldKind;

    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Result<Value>;
}

macro_rules! impl_signed {
    ( $( $t:ty ),+ ) => {
        $(
            impl Primitive for $t {
                const KIND: FieldKind = FieldKind::Int;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I64(v) => <$t>::try_from(*v).ok(),
                        Value::U64(v) => <$t>::try_from(*v).ok(),
                        Value::Bool(v) => Some(*v as $t),
                        _ => value.as_text().and_then(|s| s.parse().ok()),
                    };
                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::I64(*self as i64))
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ( $( $t:ty ),+ ) => {
        $(
            impl Primitive for $t {
                const KIND: FieldKind = FieldKind::Uint;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I64(v) => <$t>::try_from(*v).ok(),
                        Value::U64(v) => <$t>::try_from(*v).ok(),
                        Value::Bool(v) => Some(*v as $t),
                        _ => value.as_text().and_then(|s| s.parse().ok()),
                    };
                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::U64(*self as u64))
                }
            }
        )+
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl Primitive for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn load(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Bool(v) => Some(*v),
            Value::I64(v) => Some(*v != 0),
            Value::U64(v) => Some(*v != 0),
            _ => match value.as_text() {
                Some("1" | "true") => Some(true),
                Some("0" | "false") => Some(false),
                _ => None,
            },
        };
        converted.ok_or_else(|| Error::type_conversion(value, "bool"))
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

macro_rules! impl_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Primitive for $t {
                const KIND: FieldKind = FieldKind::Float;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::F64(v) => Some(*v as $t),
                        Value::I64(v) => Some(*v as $t),
                        Value::U64(v) => Some(*v as $t),
                        _ => value.as_text().and_then(|s| s.parse().ok()),
                    };
                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::F64(*self as f64))
                }
            }
        )+
    };
}

impl_float!(f32, f64);

impl Primitive for String {
    const KIND: FieldKind = FieldKind::String;

    fn load(value: Value) -> Result<Self> {
        value.into_string()
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl Primitive for Vec<u8> {
    const KIND: FieldKind = FieldKind::Other;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.clone()))
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const KIND: FieldKind = T::KIND;

    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn to_value(&self) -> Result<Value> {
        match self {
            Some(value) => value.to_value(),
            None => Ok(Value::Null),
        }
    }
}
