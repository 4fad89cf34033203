use sqlbind_core::{schema::RecordSchema, stmt::Value, Result};

/// A type whose fields can be bound to the columns of a table.
///
/// Usually implemented with `#[derive(Record)]`. A manual implementation
/// declares its fields once through [`RecordSchema::builder`] and exposes
/// them by position:
///
/// ```
/// use sqlbind::{Primitive, Record, RecordSchema, Result, Value};
///
/// #[derive(Default)]
/// struct Tag {
///     id: u64,
///     label: String,
/// }
///
/// impl Record for Tag {
///     fn schema() -> RecordSchema {
///         RecordSchema::builder("Tag")
///             .field::<u64>("Id")
///             .field::<String>("Label")
///             .build()
///     }
///
///     fn get(&self, field: usize) -> Result<Value> {
///         match field {
///             0 => self.id.to_value(),
///             1 => self.label.to_value(),
///             _ => Err(sqlbind::Error::internal(format!("Tag has no field {field}"))),
///         }
///     }
///
///     fn set(&mut self, field: usize, value: Value) -> Result<()> {
///         match field {
///             0 => self.id = Primitive::load(value)?,
///             1 => self.label = Primitive::load(value)?,
///             _ => return Err(sqlbind::Error::internal(format!("Tag has no field {field}"))),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Record: Sized {
    /// Describes the record's fields. Field positions are the indices passed
    /// to [`get`](Record::get) and [`set`](Record::set).
    fn schema() -> RecordSchema;

    /// Reads the field at `field`.
    fn get(&self, field: usize) -> Result<Value>;

    /// Writes the field at `field`.
    fn set(&mut self, field: usize, value: Value) -> Result<()>;
}
