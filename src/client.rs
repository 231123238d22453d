use bytes::Bytes;
use http::{Method, Request};
use serde::Serialize;

use crate::builder::ResourceBuilder;
use crate::common::log;
use crate::error::Error;
use crate::response::Response;
use crate::scheme::Scheme;
use crate::transport::Transport;

/// REST client over a [`ResourceBuilder`] and a pluggable [`Transport`].
///
/// The client owns its builder but never finalizes it: every dispatch
/// renders [`ResourceBuilder::build_uri`] from the builder's state at that
/// moment, so the caller keeps mutating the same builder between calls —
/// through [`builder_mut`][RestClient::builder_mut] or the delegating
/// fluent surface on the client itself.
///
/// Calls are independent: no state persists between them, nothing is
/// retried, and no timeout is imposed beyond the transport's own. Failures
/// surface as the transport's native error inside
/// [`Error::Transport`]; non-2xx responses come back as ordinary
/// [`Response`]s for the caller to inspect.
///
/// ```no_run
/// use reso::{RestClient, Scheme};
///
/// # async fn run() -> Result<(), reso::Error> {
/// let mut client = RestClient::new();
/// client
///     .with_scheme(Scheme::Http)
///     .with_host("api.example.com")
///     .with_path("users");
///
/// let response = client.get().await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
pub struct RestClient {
    builder: ResourceBuilder,
    transport: Box<dyn Transport + Send + Sync>,
}

impl RestClient {
    /// Creates a client with an empty builder and the default
    /// [`HyperTransport`][crate::HyperTransport].
    #[cfg(feature = "hyper")]
    pub fn new() -> Self {
        Self::from_builder(ResourceBuilder::new())
    }

    /// Creates a client around an already configured builder.
    #[cfg(feature = "hyper")]
    pub fn from_builder(builder: ResourceBuilder) -> Self {
        Self::with_transport(builder, crate::transport::HyperTransport::new())
    }

    /// Creates a client with an explicit transport.
    pub fn with_transport(
        builder: ResourceBuilder,
        transport: impl Transport + Send + Sync + 'static,
    ) -> Self {
        Self { builder, transport: Box::new(transport) }
    }

    /// The builder whose state every dispatch renders.
    #[inline]
    pub fn builder(&self) -> &ResourceBuilder {
        &self.builder
    }

    #[inline]
    pub fn builder_mut(&mut self) -> &mut ResourceBuilder {
        &mut self.builder
    }

    // ===== Delegated fluent configuration =====

    pub fn with_scheme(&mut self, scheme: Scheme) -> &mut Self {
        self.builder.with_scheme(scheme);
        self
    }

    pub fn with_host(&mut self, host: &str) -> &mut Self {
        self.builder.with_host(host);
        self
    }

    pub fn with_port(&mut self, port: u32) -> Result<&mut Self, Error> {
        self.builder.with_port(port)?;
        Ok(self)
    }

    pub fn with_path(&mut self, path: &str) -> &mut Self {
        self.builder.with_path(path);
        self
    }

    pub fn with_segment_pair(&mut self, name: &str, value: &str) -> Result<&mut Self, Error> {
        self.builder.with_segment_pair(name, value)?;
        Ok(self)
    }

    pub fn with_query<T: Serialize>(&mut self, params: &T) -> Result<&mut Self, Error> {
        self.builder.with_query(params)?;
        Ok(self)
    }

    pub fn with_query_pairs<K, V>(
        &mut self,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<&mut Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.builder.with_query_pairs(pairs)?;
        Ok(self)
    }

    // ===== Dispatch =====

    /// Executes a GET request against the current builder state.
    pub async fn get(&self) -> Result<Response, Error> {
        self.send(Method::GET, None).await
    }

    /// Executes a DELETE request against the current builder state.
    pub async fn delete(&self) -> Result<Response, Error> {
        self.send(Method::DELETE, None).await
    }

    /// Executes a POST request, attaching `body` when given.
    pub async fn post(&self, body: Option<Bytes>) -> Result<Response, Error> {
        self.send(Method::POST, body).await
    }

    /// Executes a PUT request, attaching `body` when given.
    pub async fn put(&self, body: Option<Bytes>) -> Result<Response, Error> {
        self.send(Method::PUT, body).await
    }

    /// Builds a request for `method` from the builder's current state and
    /// dispatches it through the transport.
    pub async fn send(&self, method: Method, body: Option<Bytes>) -> Result<Response, Error> {
        let uri = self.builder.build_uri()?;
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body.unwrap_or_default())?;

        match self.transport.send(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                log!("request dispatch failed: {err}");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("builder", &self.builder)
            .finish()
    }
}

#[cfg(feature = "hyper")]
impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}
