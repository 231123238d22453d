use std::fmt;

use crate::format::BodyFormat;

/// Error for transport failures, boxed to keep the variant independent of
/// the configured [`Transport`][crate::Transport].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A possible error value from builder configuration, URI rendering,
/// request dispatch, or response interpretation.
///
/// Configuration errors are raised at the offending call, never deferred:
/// a builder that accepted every call so far is renderable except for the
/// scheme/host preconditions checked by [`State`][Error::State].
pub enum Error {
    /// An argument was rejected at configuration time.
    Validation(&'static str),
    /// The builder state cannot be rendered into a URI.
    State(&'static str),
    /// The rendered string did not parse as a URI.
    Uri(http::uri::InvalidUri),
    /// The declared body format has no deserializer.
    UnsupportedFormat(BodyFormat),
    /// A sort key was registered twice.
    DuplicateKey(String),
    /// Response body deserialization failed.
    Json(serde_json::Error),
    /// A query-parameter object failed to serialize.
    Encode(serde_urlencoded::ser::Error),
    /// Request assembly failed.
    Http(http::Error),
    /// The transport failed to produce a response.
    Transport(BoxError),
}

// ===== Conversions =====

impl From<http::uri::InvalidUri> for Error {
    fn from(v: http::uri::InvalidUri) -> Self {
        Self::Uri(v)
    }
}

impl From<serde_json::Error> for Error {
    fn from(v: serde_json::Error) -> Self {
        Self::Json(v)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(v: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(v)
    }
}

impl From<http::Error> for Error {
    fn from(v: http::Error) -> Self {
        Self::Http(v)
    }
}

// ===== Formatting =====

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Uri(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Transport(e) => Some(&**e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation(msg) => msg.fmt(f),
            Self::State(msg) => msg.fmt(f),
            Self::Uri(e) => write!(f, "rendered URI is invalid: {e}"),
            Self::UnsupportedFormat(format) => {
                write!(f, "body format {format:?} is not supported")
            }
            Self::DuplicateKey(key) => write!(f, "sort key {key:?} is already registered"),
            Self::Json(e) => e.fmt(f),
            Self::Encode(e) => e.fmt(f),
            Self::Http(e) => e.fmt(f),
            Self::Transport(e) => e.fmt(f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut f = f.debug_tuple("Error");
        match self {
            Self::Validation(msg) => f.field(msg),
            Self::State(msg) => f.field(msg),
            Self::Uri(e) => f.field(e),
            Self::UnsupportedFormat(format) => f.field(format),
            Self::DuplicateKey(key) => f.field(key),
            Self::Json(e) => f.field(e),
            Self::Encode(e) => f.field(e),
            Self::Http(e) => f.field(e),
            Self::Transport(e) => f.field(e),
        }
        .finish()
    }
}
