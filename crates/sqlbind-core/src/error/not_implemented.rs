use super::Error;

#[derive(Debug)]
pub(super) struct NotImplementedError {
    operation: &'static str,
}

impl std::error::Error for NotImplementedError {}

impl core::fmt::Display for NotImplementedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not implemented yet: {}", self.operation)
    }
}

impl Error {
    pub fn not_implemented(operation: &'static str) -> Error {
        Error::from(super::ErrorKind::NotImplemented(NotImplementedError {
            operation,
        }))
    }

    pub fn is_not_implemented(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotImplemented(_)))
    }
}
