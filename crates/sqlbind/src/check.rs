//! Column type compatibility between a table and a record type.
//!
//! Findings never fail binding construction. They are logged and collected
//! into the binding's warning string.

use sqlbind_core::schema::{
    record::{Field, FieldKind},
    Column,
};

use once_cell::sync::Lazy;
use regex::Regex;

static BOOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tinyint\(1\)( unsigned)?$").unwrap());

static INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(tiny|small|medium|big)?int(\(\d+\))?$").unwrap());

static UINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(tiny|small|medium|big)?int(\(\d+\))? unsigned$").unwrap());

static FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(float|double)(\(\d+(,\d+)?\))?( unsigned)?$").unwrap());

static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^((char|varchar|binary|varbinary)(\(\d+\))?|text|blob|enum.*)$").unwrap()
});

/// Returns `true` when values of `column` can be loaded into `field`.
///
/// Nullability must agree first: an `Option` field pairs with a nullable
/// column and every other field with a `NOT NULL` column. Fields of kind
/// [`FieldKind::Other`] are not checked past that.
pub fn check_field_type(table: &str, column: &Column, field: &Field) -> bool {
    if field.ty.nullable != column.is_nullable() {
        log::warn!(
            "nullability mismatch; table={table}; column={}; null={}; field={}; nullable={}",
            column.name,
            column.nullable,
            field.name,
            field.ty.nullable
        );
        return false;
    }

    let ty = column.ty.as_str();
    let ok = match field.ty.kind {
        FieldKind::Bool => BOOL.is_match(ty),
        FieldKind::Int => INT.is_match(ty),
        FieldKind::Uint => UINT.is_match(ty),
        FieldKind::Float => FLOAT.is_match(ty),
        FieldKind::String => STRING.is_match(ty),
        FieldKind::Json => STRING.is_match(ty) || ty.eq_ignore_ascii_case("json"),
        FieldKind::Other => true,
    };

    if !ok {
        log::warn!(
            "column type mismatch; table={table}; column={}; type={ty}; field={}; kind={:?}",
            column.name,
            field.name,
            field.ty.kind
        );
    }

    ok
}

/// Checks every bound column against its field and describes the columns
/// that failed, or returns `None` when all of them pass.
pub fn check_columns<'a>(
    table: &str,
    pairs: impl IntoIterator<Item = (&'a Column, &'a Field)>,
) -> Option<String> {
    let mismatched: Vec<&str> = pairs
        .into_iter()
        .filter(|(column, field)| !check_field_type(table, column, field))
        .map(|(column, _)| column.name.as_str())
        .collect();

    if mismatched.is_empty() {
        None
    } else {
        Some(format!("mismatched type in columns {}", mismatched.join(",")))
    }
}
