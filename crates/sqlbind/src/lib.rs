pub mod binding;
pub use binding::Binding;

pub mod check;

pub mod db;
pub use db::Db;

mod entity;

pub mod introspect;

mod record;
pub use record::Record;

mod table;
pub use table::Table;

pub use sqlbind_core::{
    driver::{self, Driver},
    schema::{
        self,
        name::{camel_to_snake, snake_to_camel},
        record::{FieldKind, FieldOptions, RecordSchema},
        Column, Index,
    },
    stmt::{Json, Primitive, Value},
    Error, Result,
};

pub use sqlbind_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Record, Result};
    pub use sqlbind_core::{
        schema::record::{Field, FieldOptions, RecordSchema},
        stmt::{Primitive, Value},
    };
    pub use std::{option::Option, string::String, vec::Vec};
}
