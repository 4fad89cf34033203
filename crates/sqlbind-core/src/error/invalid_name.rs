use super::Error;

/// Error when a table name is not a plain identifier.
///
/// Table names are interpolated into statement text, so anything other than
/// ASCII letters and underscores is rejected.
#[derive(Debug)]
pub(super) struct InvalidNameError {
    name: Box<str>,
}

impl std::error::Error for InvalidNameError {}

impl core::fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid table name: `{}`", self.name)
    }
}

impl Error {
    pub fn invalid_name(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidName(InvalidNameError {
            name: name.into().into(),
        }))
    }

    pub fn is_invalid_name(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidName(_)))
    }
}
