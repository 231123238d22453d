use bytes::Bytes;
use http::Request;
use std::future::Future;
use std::pin::Pin;

use crate::error::Error;
use crate::response::Response;

/// Boxed future returned by [`Transport::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Pluggable request dispatcher.
///
/// The client builds a complete [`http::Request`] and hands it here; the
/// transport performs the I/O and returns the collected [`Response`].
/// Tests substitute a canned implementation; production use goes through
/// [`HyperTransport`] (the `hyper` feature, on by default).
///
/// Transports impose their own timeout and connection policy — the client
/// adds none.
pub trait Transport {
    fn send(&self, request: Request<Bytes>) -> BoxFuture<'_, Result<Response, Error>>;
}

#[cfg(feature = "hyper")]
pub use hyper_transport::HyperTransport;

#[cfg(feature = "hyper")]
mod hyper_transport {
    use http_body_util::{BodyExt, Full};
    use hyper_util::client::legacy::{Client, connect::HttpConnector};
    use hyper_util::rt::TokioExecutor;

    use super::*;

    /// [`Transport`] backed by the hyper legacy pool client.
    ///
    /// Plain HTTP only; `https` and `ftp` URIs produced by the builder
    /// fail at connect time with the connector's native error.
    pub struct HyperTransport {
        client: Client<HttpConnector, Full<Bytes>>,
    }

    impl HyperTransport {
        /// Creates a transport with its own connection pool.
        ///
        /// Must be called within a tokio runtime.
        pub fn new() -> Self {
            Self {
                client: Client::builder(TokioExecutor::new()).build_http(),
            }
        }
    }

    impl Default for HyperTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl std::fmt::Debug for HyperTransport {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.debug_struct("HyperTransport").finish()
        }
    }

    impl Transport for HyperTransport {
        fn send(&self, request: Request<Bytes>) -> BoxFuture<'_, Result<Response, Error>> {
            let (parts, body) = request.into_parts();
            let request = Request::from_parts(parts, Full::new(body));
            let pending = self.client.request(request);

            Box::pin(async move {
                let response: http::Response<hyper::body::Incoming> = pending
                    .await
                    .map_err(|e| Error::Transport(Box::new(e)))?;

                let (parts, body) = response.into_parts();
                let body = body
                    .collect()
                    .await
                    .map_err(|e| Error::Transport(Box::new(e)))?
                    .to_bytes();

                Ok(Response::new(parts.status, parts.headers, body))
            })
        }
    }
}
