use crate::{check, introspect, Db, Record, Result};

use indexmap::IndexMap;
use serde::Serialize;
use sqlbind_core::{
    schema::{
        name::snake_to_camel,
        record::{FieldKind, RecordSchema},
        Column,
    },
    Error,
};
use sqlbind_sql::{Serializer, Statement};

use std::{collections::HashMap, fmt, marker::PhantomData};

/// The compiled binding of one table to the record type `R`.
///
/// Holds the table's columns in database order, each linked to the record
/// field it loads into, and the statement templates used by the entity
/// operations. A binding never changes once built and holds no session
/// state, so it can be shared freely.
#[derive(Serialize)]
pub struct Binding<R> {
    #[serde(skip)]
    db: Db,

    /// Table name
    name: String,

    columns: Vec<Column>,

    /// Positions in `columns` written by INSERT.
    #[serde(skip)]
    insert_columns: Vec<usize>,

    /// Positions in `columns` written by UPDATE.
    #[serde(skip)]
    update_columns: Vec<usize>,

    /// Every column, quoted and comma separated.
    column_names: String,

    #[serde(rename = "select_string")]
    select_sql: String,

    #[serde(rename = "insert_string")]
    insert_sql: String,

    #[serde(rename = "update_string")]
    update_sql: String,

    #[serde(skip)]
    schema: RecordSchema,

    #[serde(rename = "type_name")]
    record_name: String,

    #[serde(rename = "field_by_name")]
    field_by_column: IndexMap<String, usize>,

    /// Index of the `Id` field.
    #[serde(skip)]
    identity: usize,

    /// `WHERE <identity column> = ?`
    #[serde(skip)]
    where_identity: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    warn: Option<String>,

    #[serde(skip)]
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Binding<R> {
    /// Introspects `table` and binds its columns to the fields of `R`.
    ///
    /// Every column must bind to a field, either through the field's rename
    /// option or because the column name converts to the field name (see
    /// [`snake_to_camel`]). Fields without a column are left alone. Type
    /// mismatches do not fail; they are reported by [`Binding::warning`].
    pub(crate) async fn build(db: &Db, table: &str) -> Result<Self> {
        introspect::validate_table_name(table)?;

        let schema = R::schema();
        let identity = schema.verify()?;

        let columns = introspect::fetch_columns(db, table).await?;
        let mut columns = introspect::fetch_indexes(db, table, columns).await?;

        if columns.is_empty() {
            return Err(Error::schema_mismatch(
                table,
                &schema.name,
                "table has no columns",
            ));
        }

        bind_columns(table, &schema, &mut columns)?;

        let Some(identity_column) = columns.iter().position(|c| c.field == Some(identity)) else {
            return Err(Error::schema_mismatch(
                table,
                &schema.name,
                format!("no column binds to `{}`", schema.field(identity).name),
            ));
        };

        let insert_columns: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(i, column)| *i != identity_column && !column.no_insert)
            .map(|(i, _)| i)
            .collect();

        let update_columns: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(i, column)| *i != identity_column && !column.no_update)
            .map(|(i, _)| i)
            .collect();

        let serializer = Serializer::mysql();
        let names = |positions: &[usize]| -> Vec<&str> {
            positions.iter().map(|&i| columns[i].name.as_str()).collect()
        };

        let column_names = serializer.column_list(columns.iter().map(|c| c.name.as_str()));
        let select_sql = serializer.serialize(&Statement::select(
            table,
            columns.iter().map(|c| c.name.as_str()),
        ));
        let insert_sql = serializer.serialize(&Statement::insert(table, names(&insert_columns)));
        let update_sql = serializer.serialize(&Statement::update(table, names(&update_columns)));
        let where_identity = serializer.where_eq(&columns[identity_column].name);

        let field_by_column = columns
            .iter()
            .filter_map(|column| column.field.map(|field| (column.name.clone(), field)))
            .collect();

        let warn = check::check_columns(
            table,
            columns
                .iter()
                .filter_map(|column| column.field.map(|field| (column, schema.field(field)))),
        );

        if let Some(warn) = &warn {
            log::warn!("table={table}; record={}; {warn}", schema.name);
        }

        log::debug!(
            "bound table; table={table}; record={}; columns={}; insert={}; update={}",
            schema.name,
            columns.len(),
            insert_columns.len(),
            update_columns.len()
        );

        Ok(Self {
            db: db.clone(),
            name: table.to_string(),
            columns,
            insert_columns,
            update_columns,
            column_names,
            select_sql,
            insert_sql,
            update_sql,
            record_name: schema.name.clone(),
            schema,
            field_by_column,
            identity,
            where_identity,
            warn,
            _record: PhantomData,
        })
    }
}

/// Links every column to a record field and copies the field's insert and
/// update options onto it. Fails unless every column finds exactly one
/// field of its own.
fn bind_columns(table: &str, schema: &RecordSchema, columns: &mut [Column]) -> Result<()> {
    let mut renamed = HashMap::new();
    let mut by_name = HashMap::new();

    for (i, field) in schema.fields.iter().enumerate() {
        match &field.options.rename {
            Some(column) => {
                if let Some(other) = renamed.insert(column.as_str(), i) {
                    return Err(Error::schema_mismatch(
                        table,
                        &schema.name,
                        format!(
                            "fields `{}` and `{}` both rename to column `{column}`",
                            schema.field(other).name,
                            field.name
                        ),
                    ));
                }
            }
            None => {
                by_name.insert(field.name.as_str(), i);
            }
        }
    }

    let mut bound_by: Vec<Option<&str>> = vec![None; schema.fields.len()];
    let mut unmatched = vec![];

    for column in columns.iter_mut() {
        let ident = snake_to_camel(&column.name);
        let field = renamed
            .get(column.name.as_str())
            .or_else(|| by_name.get(ident.as_str()))
            .copied();

        let Some(field) = field else {
            log::warn!(
                "column has no matching field; table={table}; column={}; record={}; field={ident}",
                column.name,
                schema.name
            );
            unmatched.push(column.name.as_str());
            continue;
        };

        if let Some(other) = bound_by[field] {
            return Err(Error::schema_mismatch(
                table,
                &schema.name,
                format!(
                    "columns {other},{} both bind field `{}`",
                    column.name,
                    schema.field(field).name
                ),
            ));
        }

        let options = &schema.field(field).options;
        column.field = Some(field);
        column.no_insert = options.no_insert;
        column.no_update = options.no_update;
        bound_by[field] = Some(column.name.as_str());
    }

    if !unmatched.is_empty() {
        return Err(Error::schema_mismatch(
            table,
            &schema.name,
            format!("unmatched columns {}", unmatched.join(",")),
        ));
    }

    Ok(())
}

impl<R> Binding<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in the order the database reports them, which is also the
    /// SELECT order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn insert_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.insert_columns.iter().map(|&i| &self.columns[i])
    }

    pub fn update_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.update_columns.iter().map(|&i| &self.columns[i])
    }

    pub fn column_names(&self) -> &str {
        &self.column_names
    }

    /// `` SELECT `a`, `b` FROM `table` `` with a trailing space.
    pub fn select_sql(&self) -> &str {
        &self.select_sql
    }

    /// `` INSERT INTO `table` (`b`) VALUES (?) `` with a trailing space.
    pub fn insert_sql(&self) -> &str {
        &self.insert_sql
    }

    /// `` UPDATE `table` SET `b`=? `` with a trailing space.
    pub fn update_sql(&self) -> &str {
        &self.update_sql
    }

    /// Name of the bound record type.
    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Returns the index of the field bound to column `name`.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_by_column.get(name).copied()
    }

    pub fn is_column(&self, name: &str) -> bool {
        self.field_by_column.contains_key(name)
    }

    /// Columns whose type did not match their field, e.g.
    /// `mismatched type in columns a,b`.
    pub fn warning(&self) -> Option<&str> {
        self.warn.as_deref()
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub(crate) fn identity(&self) -> usize {
        self.identity
    }

    pub(crate) fn where_identity(&self) -> &str {
        &self.where_identity
    }

    pub(crate) fn field_kind(&self, field: usize) -> Option<FieldKind> {
        self.schema.fields.get(field).map(|field| field.ty.kind)
    }
}

impl<R> fmt::Debug for Binding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("record", &self.record_name)
            .field("columns", &self.columns)
            .field("select_sql", &self.select_sql)
            .field("insert_sql", &self.insert_sql)
            .field("update_sql", &self.update_sql)
            .field("warn", &self.warn)
            .finish()
    }
}
