/// Declared encoding of a response body.
///
/// Only [`Json`][BodyFormat::Json] has a deserializer; see
/// [`Response::deserialize`][crate::Response::deserialize] for the policy
/// on the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyFormat {
    /// The value was not explicitly set.
    #[default]
    Unspecified,
    /// `text/plain`.
    Text,
    /// `application/json`.
    Json,
    /// `application/xml`.
    Xml,
    /// Raw bytes.
    Binary,
}
