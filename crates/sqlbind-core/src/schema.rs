pub mod name;

pub mod record;
pub use record::RecordSchema;

pub mod table;
pub use table::{Column, Index};
