mod json;
pub use json::Json;

mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;
