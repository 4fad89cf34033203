#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod placeholder;
use placeholder::Placeholder;

mod statement;

use crate::Statement;

/// Serializes statement templates into MySQL text.
///
/// Every identifier is backtick-quoted so reserved words can be used as
/// table or column names.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter {
    /// Where to write the serialized SQL
    dst: String,
}

impl Serializer {
    pub fn mysql() -> Self {
        Self { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        let mut fmt = Formatter { dst: String::new() };
        stmt.to_sql(&mut fmt);
        fmt.dst
    }

    /// Serializes a comma separated list of quoted column names, e.g.
    /// `` `id`, `name` ``.
    pub fn column_list<'a>(&self, columns: impl IntoIterator<Item = &'a str>) -> String {
        let mut fmt = Formatter { dst: String::new() };
        Comma(columns.into_iter().map(Ident)).to_sql(&mut fmt);
        fmt.dst
    }

    /// Serializes `` WHERE `<column>` = ? ``. Templates end in a space, so
    /// the clause can be appended directly.
    ///
    /// Unlike a bare ` WHERE id = ?` suffix, the column is quoted and there
    /// is no leading space. Identity lookups use this for whatever column
    /// binds `Id`.
    pub fn where_eq(&self, column: &str) -> String {
        let mut fmt = Formatter { dst: String::new() };
        fmt!(&mut fmt, "WHERE " Ident(column) " = " Placeholder);
        fmt.dst
    }
}
