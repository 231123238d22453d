use serde::Serialize;

use crate::error::Error;
use crate::query::QueryParams;
use crate::scheme::Scheme;

#[cfg(test)]
mod test;

/// Fluent resource URI builder.
///
/// Accumulates scheme, host, port, path, key/value path segments, and query
/// parameters; [`uri_string`][ResourceBuilder::uri_string] renders the
/// current state into
/// `scheme://host[:port][/path][/name/value]*[?key=value[&key=value]*]`.
///
/// Rendering is a pure snapshot of the current state, recomputed on every
/// call. Nothing is cached, so the builder stays mutable and reusable
/// between renders and between requests dispatched through
/// [`RestClient`][crate::RestClient].
///
/// The builder is not thread-safe: sharing one instance across threads
/// requires external synchronization.
///
/// Query-parameter values are percent-encoded form-style (space as `+`);
/// segment-pair values are appended raw. The asymmetry is kept for
/// compatibility with consumers of the legacy rendering.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    scheme: Scheme,
    host: Option<String>,
    port: Option<u32>,
    path: Option<String>,
    segments: Vec<(String, String)>,
    query: QueryParams,
}

const HOST_TRIM: &[char] = &[' ', '/'];

impl ResourceBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-seeded with a scheme and host.
    ///
    /// Unlike the fluent setters, the seed is validated immediately: an
    /// [`Unspecified`][Scheme::Unspecified] scheme or an empty host fails
    /// with [`Error::Validation`].
    pub fn for_host(scheme: Scheme, host: &str) -> Result<Self, Error> {
        if scheme.is_unspecified() {
            return Err(Error::Validation("must specify scheme"));
        }
        if host.is_empty() {
            return Err(Error::Validation("must specify host name"));
        }

        let mut builder = Self::new();
        builder.with_scheme(scheme).with_host(host);
        Ok(builder)
    }

    // ===== Fluent configuration =====

    /// Sets the scheme unconditionally, including back to
    /// [`Unspecified`][Scheme::Unspecified].
    pub fn with_scheme(&mut self, scheme: Scheme) -> &mut Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host, trimmed of surrounding spaces and slashes.
    ///
    /// An empty host is a no-op: the previously configured host is kept.
    pub fn with_host(&mut self, host: &str) -> &mut Self {
        if !host.is_empty() {
            self.host = Some(host.trim_matches(HOST_TRIM).to_owned());
        }
        self
    }

    /// Sets the port.
    ///
    /// Fails with [`Error::Validation`] outside `1..=65535`.
    pub fn with_port(&mut self, port: u32) -> Result<&mut Self, Error> {
        if port < 1 || port > 65535 {
            return Err(Error::Validation("invalid port range"));
        }
        self.port = Some(port);
        Ok(self)
    }

    /// Sets the path component, trimmed of surrounding spaces and slashes.
    ///
    /// Overwrites any prior path; it does not merge with segment pairs.
    pub fn with_path(&mut self, path: &str) -> &mut Self {
        self.path = Some(path.trim_matches(HOST_TRIM).to_owned());
        self
    }

    /// Appends a `/name/value` path segment pair.
    ///
    /// Pairs render after the path in insertion order, and duplicate names
    /// are allowed: every call appends. Fails with [`Error::Validation`]
    /// when either side is empty.
    pub fn with_segment_pair(&mut self, name: &str, value: &str) -> Result<&mut Self, Error> {
        if name.is_empty() {
            return Err(Error::Validation("segment name must not be empty"));
        }
        if value.is_empty() {
            return Err(Error::Validation("segment value must not be empty"));
        }

        self.segments.push((name.to_owned(), value.to_owned()));
        Ok(self)
    }

    /// Adds one query parameter per field of `params`.
    ///
    /// See [`QueryParams::extend_object`] for the field-enumeration rules.
    pub fn with_query<T: Serialize>(&mut self, params: &T) -> Result<&mut Self, Error> {
        self.query.extend_object(params)?;
        Ok(self)
    }

    /// Adds the key/value pairs as query parameters, later duplicate keys
    /// overwriting earlier ones.
    ///
    /// Fails with [`Error::Validation`] when the sequence is empty.
    pub fn with_query_pairs<K, V>(
        &mut self,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<&mut Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut any = false;
        for (key, value) in pairs {
            self.query.insert(key, value);
            any = true;
        }

        if !any {
            return Err(Error::Validation("query parameter sequence is empty"));
        }
        Ok(self)
    }

    // ===== Inspection =====

    #[inline]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[inline]
    pub fn segments(&self) -> &[(String, String)] {
        &self.segments
    }

    #[inline]
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    // ===== Rendering =====

    /// Renders the current state into a URI string.
    ///
    /// Fails with [`Error::State`] when the scheme is still
    /// [`Unspecified`][Scheme::Unspecified] or no host is set; no partial
    /// URI is ever returned.
    pub fn uri_string(&self) -> Result<String, Error> {
        if self.scheme.is_unspecified() {
            return Err(Error::State("scheme not set"));
        }

        let host = match self.host.as_deref() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(Error::State("host not set")),
        };

        let mut out = String::new();
        out.push_str(self.scheme.as_str());
        out.push_str("://");
        out.push_str(host);

        if let Some(port) = self.port {
            out.push(':');
            out.push_str(&port.to_string());
        }

        if let Some(path) = self.path.as_deref() {
            if !path.is_empty() {
                ensure_slash(&mut out);
                out.push_str(path);
            }
        }

        for (name, value) in &self.segments {
            ensure_slash(&mut out);
            out.push_str(name);
            out.push('/');
            out.push_str(value);
        }

        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query.to_string());
        }

        Ok(out)
    }

    /// Renders the current state and parses it as an [`http::Uri`].
    ///
    /// A render that does not parse (stray characters in raw components)
    /// surfaces as [`Error::Uri`].
    pub fn build_uri(&self) -> Result<http::Uri, Error> {
        let uri = self.uri_string()?;
        Ok(uri.parse()?)
    }
}

fn ensure_slash(out: &mut String) {
    if !out.ends_with('/') {
        out.push('/');
    }
}
