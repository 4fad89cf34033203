use super::Error;

/// Error when a lookup names a column the binding does not know.
#[derive(Debug)]
pub(super) struct UnknownColumnError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnknownColumnError {}

impl core::fmt::Display for UnknownColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column `{}`.`{}`", self.table, self.column)
    }
}

impl Error {
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumnError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    pub fn is_unknown_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownColumn(_)))
    }
}
