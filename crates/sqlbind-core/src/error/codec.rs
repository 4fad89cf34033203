use super::Error;

/// Error when a nested structured field cannot be encoded to JSON.
///
/// `target` names the column, or the Rust type when no column is known.
#[derive(Debug)]
pub(super) struct EncodeError {
    target: Box<str>,
    source: serde_json::Error,
}

/// Error when JSON text read from a column cannot be decoded into a nested
/// structured field.
#[derive(Debug)]
pub(super) struct DecodeError {
    target: Box<str>,
    source: serde_json::Error,
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot encode json for `{}`: {}",
            self.target, self.source
        )
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot decode json for `{}`: {}",
            self.target, self.source
        )
    }
}

impl Error {
    pub fn encode(target: impl Into<String>, source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Encode(EncodeError {
            target: target.into().into(),
            source,
        }))
    }

    pub fn decode(target: impl Into<String>, source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            target: target.into().into(),
            source,
        }))
    }

    pub fn is_encode(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Encode(_)))
    }

    pub fn is_decode(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Decode(_)))
    }
}
