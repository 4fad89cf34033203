use crate::{stmt::Primitive, Error, Result};

use std::collections::HashSet;

/// Name of the identity field every record type must declare.
pub const IDENTITY_FIELD: &str = "Id";

/// Describes the fields of a record type.
///
/// Produced once per type, either by `#[derive(Record)]` or by hand through
/// [`RecordSchema::builder`], and used instead of runtime reflection to bind
/// table columns to record fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Name of the Rust type, for diagnostics.
    pub name: String,

    /// Fields in declaration order. The position of a field is the index
    /// passed to the record's accessors.
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field identifier in capitalized-word form, e.g. `OrderId`.
    pub name: String,

    pub ty: FieldTy,

    pub options: FieldOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTy {
    pub kind: FieldKind,

    /// True when the field accepts `NULL` (an `Option<T>` field).
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    String,

    /// Nested structured value stored as JSON text.
    Json,

    /// Anything else; never type-checked.
    Other,
}

/// Per-field behavior toward the bound table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Bind to this column instead of the one derived from the field name.
    pub rename: Option<String>,

    /// Leave the column out of INSERT statements.
    pub no_insert: bool,

    /// Leave the column out of UPDATE statements.
    pub no_update: bool,
}

pub struct Builder {
    name: String,
    fields: Vec<Field>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn builder(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            fields: vec![],
        }
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    /// Checks the schema can be bound and returns the index of its identity
    /// field.
    ///
    /// Field names must be unique and exactly one field must be named `Id`
    /// with an integer type.
    pub fn verify(&self) -> Result<usize> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "record type `{}` declares field `{}` more than once",
                    self.name, field.name
                )));
            }
        }

        let Some(index) = self.fields.iter().position(|f| f.name == IDENTITY_FIELD) else {
            return Err(Error::invalid_argument(format!(
                "record type `{}` has no `{}` field",
                self.name, IDENTITY_FIELD
            )));
        };

        let ty = self.fields[index].ty;
        if !matches!(ty.kind, FieldKind::Int | FieldKind::Uint) || ty.nullable {
            return Err(Error::invalid_argument(format!(
                "`{}.{}` must be a non-nullable integer",
                self.name, IDENTITY_FIELD
            )));
        }

        Ok(index)
    }
}

impl Field {
    pub fn new<T: Primitive>(name: impl Into<String>, options: FieldOptions) -> Self {
        Self {
            name: name.into(),
            ty: FieldTy::of::<T>(),
            options,
        }
    }
}

impl FieldTy {
    pub fn of<T: Primitive>() -> Self {
        Self {
            kind: T::KIND,
            nullable: T::NULLABLE,
        }
    }
}

impl FieldOptions {
    /// Parses a comma separated annotation tag.
    ///
    /// Recognized tokens are `no-insert` and `no-update`. Any other token in
    /// first position names an alternate schema column. Unrecognized tokens
    /// after the first are logged and ignored.
    pub fn from_tag(field: &str, tag: &str) -> Self {
        let mut options = Self::default();

        if tag.is_empty() {
            return options;
        }

        for (i, token) in tag.split(',').enumerate() {
            match token {
                "no-insert" => options.no_insert = true,
                "no-update" => options.no_update = true,
                token if i == 0 => options.rename = Some(token.to_string()),
                token => log::warn!(
                    "unrecognized token in annotation of field {field}; tag={tag:?} token={token:?}"
                ),
            }
        }

        options
    }

    pub fn rename(mut self, column: impl Into<String>) -> Self {
        self.rename = Some(column.into());
        self
    }

    pub fn no_insert(mut self) -> Self {
        self.no_insert = true;
        self
    }

    pub fn no_update(mut self) -> Self {
        self.no_update = true;
        self
    }
}

impl Builder {
    pub fn field<T: Primitive>(self, name: impl Into<String>) -> Self {
        self.field_with::<T>(name, FieldOptions::default())
    }

    pub fn field_with<T: Primitive>(mut self, name: impl Into<String>, options: FieldOptions) -> Self {
        self.fields.push(Field::new::<T>(name, options));
        self
    }

    /// Adds a field configured by an annotation tag, see
    /// [`FieldOptions::from_tag`].
    pub fn tagged<T: Primitive>(self, name: impl Into<String>, tag: &str) -> Self {
        let name = name.into();
        let options = FieldOptions::from_tag(&name, tag);
        self.field_with::<T>(name, options)
    }

    pub fn build(self) -> RecordSchema {
        RecordSchema::new(self.name, self.fields)
    }
}
