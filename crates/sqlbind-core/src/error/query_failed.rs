use super::Error;

/// Context attached to a driver error when a schema introspection query
/// fails. The driver error is the cause.
#[derive(Debug)]
pub(super) struct QueryFailedError {
    sql: Box<str>,
}

impl std::error::Error for QueryFailedError {}

impl core::fmt::Display for QueryFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "query failed: {}", self.sql)
    }
}

impl Error {
    /// Creates a query failure naming the statement that failed.
    ///
    /// Usually attached with [`Error::context`] on top of the driver error.
    pub fn query_failed(sql: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QueryFailed(QueryFailedError {
            sql: sql.into().into(),
        }))
    }

    pub fn is_query_failed(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::QueryFailed(_)))
    }
}
