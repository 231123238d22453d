use std::fmt;

/// URI scheme.
///
/// The zero value is [`Unspecified`][Scheme::Unspecified]; a builder left
/// with it refuses to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// The value was not explicitly set.
    #[default]
    Unspecified,
    /// Hypertext Transfer Protocol.
    Http,
    /// Hypertext Transfer Protocol Secure.
    Https,
    /// File Transfer Protocol.
    Ftp,
}

impl Scheme {
    /// Returns the lowercase scheme name, empty for
    /// [`Unspecified`][Scheme::Unspecified].
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Http => "http",
            Self::Https => "https",
            Self::Ftp => "ftp",
        }
    }

    #[inline]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
