use super::Error;

/// Error when an update is attempted on a record whose `Id` is zero.
#[derive(Debug)]
pub(super) struct MissingIdentityError {
    table: Box<str>,
}

impl std::error::Error for MissingIdentityError {}

impl core::fmt::Display for MissingIdentityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no defined id for update of `{}`", self.table)
    }
}

impl Error {
    pub fn missing_identity(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentityError {
            table: table.into().into(),
        }))
    }

    pub fn is_missing_identity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingIdentity(_)))
    }
}
