//! Build and send `multipart/form-data` upload requests.
//!
//! ## Overview
//!
//! This crate assembles `multipart/form-data` HTTP request bodies (RFC 2388
//! style) out of string fields and local file payloads, and issues them as
//! `POST` requests through a pluggable [`Transport`] collaborator. It does
//! not talk to the network itself: any HTTP client can serve as the
//! transport by implementing a small trait.
//!
//! A form is described with [`MultipartForm`], which keeps fields and files
//! in insertion order and encodes them into a single byte buffer delimited
//! by a freshly generated boundary. The resulting request carries the
//! matching `Content-Type: multipart/form-data; boundary=...` header, and
//! the body can either travel in memory or be staged to a local file first,
//! for transports that only accept file-backed upload bodies (e.g.
//! background transfer services).
//!
//! ## Usage
//!
//! ```no_run
//! use formpost::{MultipartForm, Transport, TransportExt, TransportResponse};
//!
//! # fn run(client: &impl Transport) -> formpost::Result<()> {
//! let form = MultipartForm::new("file")
//!     .with_field("foo", "bar")
//!     .with_file("photos/apple.jpg");
//! let mut response = client.upload_multipart("https://example.com/upload.php", form)?;
//! println!("{}", response.text()?);
//! # Ok(())
//! # }
//! ```
//!
//! To attach HTTP Basic credentials, build the request explicitly and
//! decorate it before sending:
//!
//! ```no_run
//! use formpost::{MultipartForm, Transport};
//!
//! # fn run(client: &impl Transport) -> formpost::Result<()> {
//! let form = MultipartForm::new("file").with_file("photos/apple.jpg");
//! let (request, body) = form.into_request("https://example.com/upload.php")?;
//! let request = request.with_basic_auth("test", "password").with_body(body);
//! client.send(request)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! The boundary is a `Boundary-` prefix followed by a random UUID, which
//! makes a collision with part content unlikely, but the encoder does not
//! validate that the boundary is absent from field values or file contents.
//! Field names and values are likewise emitted without escaping. Both are
//! the caller's responsibility.

#![deny(missing_docs)]

mod auth;
mod boundary;
mod error;
mod mime;
mod multipart;
mod request;

pub mod client;

pub use boundary::generate_boundary;
pub use client::{Transport, TransportExt, TransportResponse};
pub use error::{Error, Result};
pub use mime::mime_for_path;
pub use multipart::MultipartForm;
pub use request::{Request, RequestBody};
