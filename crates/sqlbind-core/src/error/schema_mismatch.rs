use super::Error;

/// Error when a table and a record type cannot be bound to each other, e.g.
/// one or more columns have no corresponding record field.
///
/// Binding is all-or-nothing: a table is never partially matched.
#[derive(Debug)]
pub(super) struct SchemaMismatchError {
    table: Box<str>,
    record: Box<str>,
    detail: Box<str>,
}

impl std::error::Error for SchemaMismatchError {}

impl core::fmt::Display for SchemaMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table `{}` does not match record `{}`: {}",
            self.table, self.record, self.detail
        )
    }
}

impl Error {
    pub fn schema_mismatch(
        table: impl Into<String>,
        record: impl Into<String>,
        detail: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatchError {
            table: table.into().into(),
            record: record.into().into(),
            detail: detail.into().into(),
        }))
    }

    pub fn is_schema_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::SchemaMismatch(_)))
    }
}
