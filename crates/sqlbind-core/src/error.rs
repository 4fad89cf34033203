mod adhoc;
mod codec;
mod driver;
mod internal;
mod invalid_argument;
mod invalid_name;
mod missing_identity;
mod not_implemented;
mod query_failed;
mod scan;
mod schema_mismatch;
mod type_conversion;
mod unknown_column;

use adhoc::AdhocError;
use codec::{DecodeError, EncodeError};
use driver::DriverError;
use internal::InternalError;
use invalid_argument::InvalidArgumentError;
use invalid_name::InvalidNameError;
use missing_identity::MissingIdentityError;
use not_implemented::NotImplementedError;
use query_failed::QueryFailedError;
use scan::ScanError;
use schema_mismatch::SchemaMismatchError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unknown_column::UnknownColumnError;

/// Error type shared by every sqlbind crate.
///
/// A single pointer wide. Errors form a chain: [`Error::context`] wraps an
/// error in a higher level one, and the `is_*` predicates look through the
/// whole chain.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error in `consequent`, which becomes the outermost message.
    ///
    /// `Error::driver(io).context(Error::query_failed(sql))` displays as
    /// `query failed: <sql>: <io error>`.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    debug_assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                // The consequent is shared with another handle; keep its message.
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(inner) => &inner.kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Returns `true` if any error in the context chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Encode(err) => Some(err),
            ErrorKind::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// Walks an error and its causes, outermost first.
struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<&'a Error> {
        let err = self.next?;
        self.next = err.inner.as_ref().and_then(|inner| inner.cause.as_ref());
        Some(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", err.kind())?;
        }
        Ok(())
    }
}

/// `{:?}` prints the message; `{:#?}` lists every kind in the chain.
impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.chain().map(Error::kind))
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    InvalidName(InvalidNameError),
    InvalidArgument(InvalidArgumentError),
    QueryFailed(QueryFailedError),
    SchemaMismatch(SchemaMismatchError),
    UnknownColumn(UnknownColumnError),
    MissingIdentity(MissingIdentityError),
    Encode(EncodeError),
    Decode(DecodeError),
    Scan(ScanError),
    TypeConversion(TypeConversionError),
    NotImplemented(NotImplementedError),
    Internal(InternalError),
    Unknown,
}

impl ErrorKind {
    fn message(&self) -> &dyn core::fmt::Display {
        match self {
            Self::Anyhow(err) => err,
            Self::Adhoc(err) => err,
            Self::Driver(err) => err,
            Self::InvalidName(err) => err,
            Self::InvalidArgument(err) => err,
            Self::QueryFailed(err) => err,
            Self::SchemaMismatch(err) => err,
            Self::UnknownColumn(err) => err,
            Self::MissingIdentity(err) => err,
            Self::Encode(err) => err,
            Self::Decode(err) => err,
            Self::Scan(err) => err,
            Self::TypeConversion(err) => err,
            Self::NotImplemented(err) => err,
            Self::Internal(err) => err,
            Self::Unknown => &"unknown sqlbind error",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.message(), f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        let inner = ErrorInner { kind, cause: None };
        Error {
            inner: Some(Arc::new(inner)),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Anyhow(err).into()
    }
}

/// Anything accepted by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for core::fmt::Arguments<'_> {
    fn into_error(self) -> Error {
        Error::from_args(self)
    }
}
