//! Fluent resource builder, REST dispatch, and collection query helpers.
//!
//! # Resource building
//!
//! [`ResourceBuilder`] accumulates scheme, host, port, path, key/value path
//! segments, and query parameters through chained calls, and renders them
//! into a well formed URI on demand:
//!
//! ```
//! use reso::{ResourceBuilder, Scheme};
//!
//! let mut builder = ResourceBuilder::new();
//! builder
//!     .with_scheme(Scheme::Http)
//!     .with_host("www.google.com")
//!     .with_segment_pair("FirstName", "Jon")?
//!     .with_segment_pair("LastName", "Snow")?;
//!
//! assert_eq!(
//!     builder.uri_string()?,
//!     "http://www.google.com/FirstName/Jon/LastName/Snow",
//! );
//! # Ok::<(), reso::Error>(())
//! ```
//!
//! # Dispatch
//!
//! [`RestClient`] owns a builder and sends GET/POST/PUT/DELETE requests
//! against whatever the builder renders at call time, through a pluggable
//! [`Transport`]. The response is returned raw; interpretation is the
//! caller's job, with [`Response::deserialize`] covering the JSON case.
//!
//! # Collection queries
//!
//! [`PropertyFilter`] and [`DynamicSort`] operate on in-memory collections
//! with the same declarative, string-keyed configuration style: register
//! typed accessors up front, then drive filtering and sorting from plain
//! strings at the call site.

#![warn(missing_debug_implementations)]

mod common;

mod error;
mod scheme;
mod query;
mod builder;

mod format;
mod response;
mod transport;
mod client;

mod predicate;
mod filter;
mod sort;

pub use error::{BoxError, Error};
pub use scheme::Scheme;
pub use query::QueryParams;
pub use builder::ResourceBuilder;

pub use format::BodyFormat;
pub use response::Response;
pub use transport::{BoxFuture, Transport};
pub use client::RestClient;

#[cfg(feature = "hyper")]
pub use transport::HyperTransport;

pub use predicate::Predicate;
pub use filter::{MatchMode, PropertyFilter};
pub use sort::{by, DynamicSort, SortKey};
