use serde::Serialize;

/// A table column as reported by `SHOW COLUMNS`, plus its binding to a
/// record field once the table has been bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name in the database.
    #[serde(rename = "field")]
    pub name: String,

    /// Raw column type, e.g. `int(10) unsigned` or `varchar(255)`.
    #[serde(rename = "column_type")]
    pub ty: String,

    /// `YES` or `NO`, exactly as reported by the database.
    pub nullable: String,

    /// `PRI`, `UNI`, `MUL` or empty.
    pub key: String,

    #[serde(rename = "default_value", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// e.g. `auto_increment`
    pub extra: String,

    /// Index of the bound record field. `None` until the table is bound.
    #[serde(rename = "struct_field", skip_serializing_if = "Option::is_none")]
    pub field: Option<usize>,

    /// Leave the column out of INSERT statements.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_insert: bool,

    /// Leave the column out of UPDATE statements.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_update: bool,

    /// Index entries covering this column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Index>,
}

/// One row of `SHOW INDEXES`: a single column's participation in an index.
///
/// Informational only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Index {
    #[serde(rename = "table_name")]
    pub table: String,

    /// True when the index permits duplicate values.
    pub non_unique: bool,

    /// Index name; `PRIMARY` for the primary key.
    pub key_name: String,

    /// 1-based position of the column within the index.
    pub seq_in_index: u32,

    pub column_name: String,

    /// `A` (ascending), `D` (descending) or absent when not sorted.
    pub collation: Option<String>,

    /// Estimated number of unique values.
    pub cardinality: Option<u64>,

    /// Number of indexed characters when only a prefix is indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_part: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub packed: Option<String>,

    /// `YES` when the column may contain `NULL`, otherwise empty.
    pub null: String,

    /// e.g. `BTREE`
    pub index_type: String,

    pub comment: String,

    pub index_comment: String,
}

impl Column {
    /// Creates an unbound column descriptor.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        nullable: impl Into<String>,
        key: impl Into<String>,
        default: Option<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: nullable.into(),
            key: key.into(),
            default,
            extra: extra.into(),
            field: None,
            no_insert: false,
            no_update: false,
            indexes: vec![],
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable == "YES"
    }

    pub fn is_not_null(&self) -> bool {
        self.nullable == "NO"
    }

    pub fn is_primary_key(&self) -> bool {
        self.key == "PRI"
    }

    pub fn is_auto_increment(&self) -> bool {
        self.extra.contains("auto_increment")
    }

    pub fn is_unique(&self) -> bool {
        self.indexes.iter().any(|index| !index.non_unique)
    }
}

impl Index {
    pub fn is_primary_key(&self) -> bool {
        self.key_name == "PRIMARY"
    }
}
