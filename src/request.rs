use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// The body attached to an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Body bytes handed to the transport in memory.
    InMemory(Vec<u8>),
    /// Body previously staged to a local file; the transport reads it from
    /// disk. Required by transports that only support file-backed upload
    /// bodies, such as background transfer services.
    StagedFile(PathBuf),
}

/// An upload request descriptor.
///
/// Two concurrent stagings to the same file path race, and the last
/// writer wins; serializing such writes is the caller's concern.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method, always `POST` for upload requests.
    pub method: Cow<'static, str>,
    /// The target URL.
    pub url: Cow<'static, str>,
    /// Header name/value pairs, in the order they were added.
    pub headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// The request body, if one has been attached yet.
    pub body: Option<RequestBody>,
}

impl Request {
    /// Creates a `POST` request for the given URL with no headers or body.
    pub fn post(url: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method: Cow::Borrowed("POST"),
            url: url.into(),
            headers: vec![],
            body: None,
        }
    }

    /// Appends a header.
    pub fn with_header(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches in-memory body bytes.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(RequestBody::InMemory(body));
        self
    }

    /// Writes `body` to `path` atomically and attaches the file reference
    /// instead of the bytes.
    ///
    /// The bytes are written to a temporary sibling first and then renamed
    /// into place, so `path` never holds a partially written body. Fails
    /// with [`Error::StageWrite`] if the write cannot complete; no body is
    /// attached in that case and the request must not be sent.
    pub fn with_staged_body(mut self, path: impl Into<PathBuf>, body: &[u8]) -> Result<Self> {
        let path = path.into();
        stage_atomically(&path, body).map_err(|source| Error::StageWrite {
            path: path.clone(),
            source,
        })?;
        self.body = Some(RequestBody::StagedFile(path));
        Ok(self)
    }
}

fn stage_atomically(path: &Path, body: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".staging");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, body)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
