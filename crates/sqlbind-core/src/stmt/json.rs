use super::{Primitive, Value};
use crate::{schema::record::FieldKind, Error, Result};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A nested structured field stored as JSON text in a single column.
///
/// ```ignore
/// #[derive(Record)]
/// struct Order {
///     id: u64,
///     shipping: Json<Address>,
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Serialize + DeserializeOwned> Primitive for Json<T> {
    const KIND: FieldKind = FieldKind::Json;

    fn load(value: Value) -> Result<Self> {
        let ty = std::any::type_name::<T>();
        let decoded = match value {
            Value::Json(v) => serde_json::from_value(v),
            Value::String(s) => serde_json::from_str(&s),
            Value::Bytes(b) => serde_json::from_slice(&b),
            value => return Err(Error::type_conversion(value, "Json")),
        };
        decoded.map(Json).map_err(|err| Error::decode(ty, err))
    }

    fn to_value(&self) -> Result<Value> {
        serde_json::to_value(&self.0)
            .map(Value::Json)
            .map_err(|err| Error::encode(std::any::type_name::<T>(), err))
    }
}
