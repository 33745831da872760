//! Transport collaborator traits.
//!
//! This crate builds requests; it does not carry them over the network.
//! Any HTTP client can act as the transport by implementing [`Transport`]
//! for a handle type and [`TransportResponse`] for its response type. The
//! blanket [`TransportExt`] then provides the one-call upload operations
//! on top of the implementation.

use std::{borrow::Cow, path::Path};

use crate::{multipart::MultipartForm, request::Request, Result};

/// A blocking HTTP transport capable of carrying upload requests.
///
/// Implementations must honor both request body modes: in-memory bytes and
/// a staged local file to read the body from. Transport-level failures
/// (network errors, TLS, etc.) are wrapped in [`crate::Error::Transport`];
/// interpreting non-2xx responses is left to the caller.
pub trait Transport {
    /// The type of response returned by this transport.
    type Response: TransportResponse;

    /// Sends the request and blocks until the response is available.
    fn send(&self, request: Request) -> Result<Self::Response>;
}

/// A response delivered by a [`Transport`].
pub trait TransportResponse {
    /// Returns the HTTP status code of this response.
    fn status(&self) -> u16;

    /// Reads the full response body as bytes.
    fn bytes(&mut self) -> Result<Vec<u8>>;

    /// Reads the full response body as text, assuming UTF-8.
    fn text(&mut self) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.bytes()?).into_owned())
    }
}

/// Multipart upload shorthands for any [`Transport`].
pub trait TransportExt: Transport {
    /// Encodes `form` and sends it to `url` with the body in memory.
    ///
    /// Propagates encoding failures ([`crate::Error::FileRead`]) without
    /// issuing a request.
    fn upload_multipart(
        &self,
        url: impl Into<Cow<'static, str>>,
        form: MultipartForm,
    ) -> Result<Self::Response> {
        let (request, body) = form.into_request(url)?;
        self.send(request.with_body(body))
    }

    /// Encodes `form`, stages the body to `staged_path`, and sends the
    /// request file-backed.
    ///
    /// Use this with transports that require the body on disk, e.g. for
    /// long-running or out-of-process transfers. Propagates
    /// [`crate::Error::FileRead`] and [`crate::Error::StageWrite`] without
    /// issuing a request.
    fn upload_multipart_staged(
        &self,
        url: impl Into<Cow<'static, str>>,
        form: MultipartForm,
        staged_path: impl AsRef<Path>,
    ) -> Result<Self::Response> {
        let (request, body) = form.into_request(url)?;
        self.send(request.with_staged_body(staged_path.as_ref(), &body)?)
    }
}

impl<T: Transport> TransportExt for T {}
