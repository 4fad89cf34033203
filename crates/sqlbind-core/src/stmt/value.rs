use crate::{Error, Result};

/// A single SQL value travelling between records and the driver.
///
/// `Json` only exists between a record accessor and the entity layer; it is
/// encoded to text before being bound as a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Json(_) => "Json",
        }
    }

    /// Returns the textual content of a `String` or UTF-8 `Bytes` value.
    ///
    /// Drivers speaking the text protocol return every column as bytes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(s) => Ok(s),
            Self::Bytes(b) => String::from_utf8(b)
                .map_err(|err| Error::type_conversion(Value::Bytes(err.into_bytes()), "String")),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident ( $($t:ty),+ ) ),+ ) => {
        $( $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+ )+
    };
}

impl_from!(
    Bool(bool),
    I64(i8, i16, i32, i64),
    U64(u8, u16, u32, u64),
    F64(f32, f64),
    String(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value)
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::I64(value as i64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
