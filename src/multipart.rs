//! Multipart form description and body generation.

use std::{borrow::Cow, fmt::Display, fs, path::PathBuf};

use crate::{
    boundary::generate_boundary, mime::mime_for_path, request::Request, Error, Result,
};

/// An ordered `multipart/form-data` form: string fields plus local files.
///
/// Fields are emitted first, then files, each group in insertion order, so
/// encoding is deterministic for a given form. All files share the same
/// field key name, which is how common receiving endpoints accept a batch
/// of uploads.
///
/// Field names and values are emitted without escaping, and no check is
/// made that the boundary does not occur inside part content.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    file_key: Cow<'static, str>,
    fields: Vec<(Cow<'static, str>, String)>,
    files: Vec<PathBuf>,
}

impl MultipartForm {
    /// Creates an empty form whose file parts will be named `file_key`.
    pub fn new(file_key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            file_key: file_key.into(),
            fields: vec![],
            files: vec![],
        }
    }

    /// Appends a string field. The value is rendered to its plain string
    /// form immediately.
    pub fn with_field(mut self, name: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.fields.push((name.into(), value.to_string()));
        self
    }

    /// Appends a local file reference. The file is not touched until the
    /// form is encoded.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Encodes the form into a single body buffer delimited by `boundary`.
    ///
    /// Every field becomes one part, then every file becomes one part with
    /// its filename (last path component) and a `Content-Type` resolved
    /// from the file extension, followed by the closing marker. A form
    /// with no fields and no files encodes to just the closing marker.
    ///
    /// Fails with [`Error::FileRead`] if any file reference cannot be read
    /// in full; nothing is returned in that case.
    pub fn encode(&self, boundary: &str) -> Result<Vec<u8>> {
        let mut body = Vec::with_capacity(self.estimate_size(boundary));

        for (name, value) in &self.fields {
            body.extend_from_slice(b"--");
            body.extend_from_slice(boundary.as_bytes());
            body.extend_from_slice(b"\r\nContent-Disposition: form-data; name=\"");
            body.extend_from_slice(name.as_bytes());
            body.extend_from_slice(b"\"\r\n\r\n");
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }

        for path in &self.files {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            let content = fs::read(path).map_err(|source| Error::FileRead {
                path: path.clone(),
                source,
            })?;
            let mimetype = mime_for_path(path);

            body.extend_from_slice(b"--");
            body.extend_from_slice(boundary.as_bytes());
            body.extend_from_slice(b"\r\nContent-Disposition: form-data; name=\"");
            body.extend_from_slice(self.file_key.as_bytes());
            body.extend_from_slice(b"\"; filename=\"");
            body.extend_from_slice(filename.as_bytes());
            body.extend_from_slice(b"\"\r\nContent-Type: ");
            body.extend_from_slice(mimetype.as_bytes());
            body.extend_from_slice(b"\r\n\r\n");
            body.extend_from_slice(&content);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(b"--");
        body.extend_from_slice(boundary.as_bytes());
        body.extend_from_slice(b"--\r\n");

        Ok(body)
    }

    /// Builds a ready-to-send `POST` request for `url` along with the
    /// encoded body bytes.
    ///
    /// A fresh boundary is generated per call and carried in the request's
    /// `content-type` header. Request and body are returned separately so
    /// the caller can decide between an in-memory send
    /// ([`Request::with_body`]) and staging the body to a local file first
    /// ([`Request::with_staged_body`]).
    pub fn into_request(self, url: impl Into<Cow<'static, str>>) -> Result<(Request, Vec<u8>)> {
        let boundary = generate_boundary();
        let request = Request::post(url).with_header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        );
        let body = self.encode(&boundary)?;
        Ok((request, body))
    }

    // Per-part header overhead only; file contents are not sized up front.
    fn estimate_size(&self, boundary: &str) -> usize {
        let parts = self.fields.len() + self.files.len();
        let field_bytes: usize = self
            .fields
            .iter()
            .map(|(name, value)| name.len() + value.len())
            .sum();
        parts * (80 + boundary.len() + self.file_key.len()) + field_bytes + boundary.len() + 6
    }
}
