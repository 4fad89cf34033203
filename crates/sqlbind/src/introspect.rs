//! Reads column and index definitions of a table from the database.

use crate::{Db, Result};

use once_cell::sync::Lazy;
use regex::Regex;
use sqlbind_core::{
    driver::Row,
    err,
    schema::{Column, Index},
    stmt::Primitive,
    Error,
};
use sqlbind_sql::{Serializer, Statement};

use std::collections::HashMap;

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z_]+$").unwrap());

/// Checks that `name` can be interpolated into statement text as a table
/// name. Placeholders cannot stand in for identifiers, so only ASCII letters
/// and underscores are accepted.
pub fn validate_table_name(name: &str) -> Result<()> {
    if TABLE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::invalid_name(name))
    }
}

/// Fetches the columns of `table` in the order the database reports them.
///
/// A table without columns yields an empty list rather than an error.
pub async fn fetch_columns(db: &Db, table: &str) -> Result<Vec<Column>> {
    let sql = Serializer::mysql().serialize(&Statement::show_columns(table));

    let rows = db
        .query(&sql, vec![])
        .await
        .map_err(|err| err.context(Error::query_failed(&sql)))?;

    rows.map(|row| {
        column_from_row(row)
            .map_err(|err| err.context(err!("problem parsing column metadata for `{table}`")))
    })
    .collect()
}

/// Fetches the indexes of `table` and attaches each entry to the column it
/// covers. Entries naming columns not in `columns` are dropped.
pub async fn fetch_indexes(db: &Db, table: &str, mut columns: Vec<Column>) -> Result<Vec<Column>> {
    let sql = Serializer::mysql().serialize(&Statement::show_indexes(table));

    let rows = db
        .query(&sql, vec![])
        .await
        .map_err(|err| err.context(Error::query_failed(&sql)))?;

    let positions: HashMap<String, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| (column.name.clone(), i))
        .collect();

    for row in rows {
        let index = index_from_row(row)
            .map_err(|err| err.context(err!("problem parsing index metadata for `{table}`")))?;

        match positions.get(&index.column_name) {
            Some(&i) => columns[i].indexes.push(index),
            None => log::debug!(
                "skipping index entry for unknown column; table={table}; index={}; column={}",
                index.key_name,
                index.column_name
            ),
        }
    }

    Ok(columns)
}

/// `SHOW COLUMNS` returns Field, Type, Null, Key, Default, Extra.
fn column_from_row(mut row: Row) -> Result<Column> {
    Ok(Column::new(
        String::load(row.take(0)?)?,
        String::load(row.take(1)?)?,
        String::load(row.take(2)?)?,
        String::load(row.take(3)?)?,
        Option::<String>::load(row.take(4)?)?,
        String::load(row.take(5)?)?,
    ))
}

/// `SHOW INDEXES` returns Table, Non_unique, Key_name, Seq_in_index,
/// Column_name, Collation, Cardinality, Sub_part, Packed, Null, Index_type,
/// Comment, Index_comment. Newer servers append more columns, which are
/// ignored.
fn index_from_row(mut row: Row) -> Result<Index> {
    Ok(Index {
        table: String::load(row.take(0)?)?,
        non_unique: bool::load(row.take(1)?)?,
        key_name: String::load(row.take(2)?)?,
        seq_in_index: u32::load(row.take(3)?)?,
        // Functional indexes have no column name.
        column_name: Option::<String>::load(row.take(4)?)?.unwrap_or_default(),
        collation: Option::<String>::load(row.take(5)?)?,
        cardinality: Option::<u64>::load(row.take(6)?)?,
        sub_part: Option::<u64>::load(row.take(7)?)?,
        packed: Option::<String>::load(row.take(8)?)?,
        null: Option::<String>::load(row.take(9)?)?.unwrap_or_default(),
        index_type: String::load(row.take(10)?)?,
        comment: Option::<String>::load(row.take(11)?)?.unwrap_or_default(),
        index_comment: Option::<String>::load(row.take(12)?)?.unwrap_or_default(),
    })
}
