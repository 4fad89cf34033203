use super::Error;

/// Error when a result row cannot be read into a record.
///
/// `target` names the column being read, or the table when the row as a
/// whole is unusable.
#[derive(Debug)]
pub(super) struct ScanError {
    target: Box<str>,
}

impl std::error::Error for ScanError {}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to scan `{}`", self.target)
    }
}

impl Error {
    pub fn scan(target: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Scan(ScanError {
            target: target.into().into(),
        }))
    }

    pub fn is_scan(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Scan(_)))
    }
}
