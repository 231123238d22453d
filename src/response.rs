use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

use crate::error::Error;
use crate::format::BodyFormat;

/// Raw HTTP response: status, headers, and the collected body bytes.
///
/// The client hands this back uninterpreted. Non-2xx statuses are not
/// errors; inspect [`status`][Response::status] and decide.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self { status, headers, body }
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The collected body bytes.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// The body as text, lossy on invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body according to the declared `format`.
    ///
    /// Deliberately minimal: only [`BodyFormat::Json`] is implemented.
    /// Any other declared format fails with [`Error::UnsupportedFormat`]
    /// and an [`Unspecified`][BodyFormat::Unspecified] format fails with
    /// [`Error::Validation`] — callers needing other formats deserialize
    /// from [`bytes`][Response::bytes] themselves.
    pub fn deserialize<T: DeserializeOwned>(&self, format: BodyFormat) -> Result<T, Error> {
        match format {
            BodyFormat::Json => Ok(serde_json::from_slice(&self.body)?),
            BodyFormat::Unspecified => {
                Err(Error::Validation("must specify a body format to deserialize"))
            }
            other => Err(Error::UnsupportedFormat(other)),
        }
    }
}
