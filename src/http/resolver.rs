//! Request → response decision procedure
//!
//! Checks run in a fixed order and the first one that fires decides the
//! response:
//!
//! 1. version other than HTTP/1.1 → 505
//! 2. method other than GET → 405
//! 3. resolved path outside the root → 404
//! 4. directory: no trailing slash → 301, else `index.html` → 200, else 404
//! 5. regular file → 200 with a content type from its extension
//! 6. anything else → 404
//!
//! The resolver keeps no state between calls. Its root and template table
//! are fixed when it is built.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::fs::{EntryKind, Filesystem, LocalFs};
use crate::http::mime::{self, content_type_for};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, STANDARD_TEMPLATES, StatusCode, Templates};

pub const SUPPORTED_VERSION: &str = "HTTP/1.1";
pub const INDEX_FILE: &str = "index.html";

/// Why a request did not get its content.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error("unsupported protocol version {0:?}")]
    UnsupportedVersion(String),
    #[error("unsupported method {0:?}")]
    UnsupportedMethod(String),
    #[error("path escapes the root: {}", .0.display())]
    PathTraversalRejected(PathBuf),
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("directory has no index: {}", .0.display())]
    DirectoryNoIndex(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::UnsupportedVersion(_) => StatusCode::HttpVersionNotSupported,
            Rejection::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            Rejection::PathTraversalRejected(_)
            | Rejection::NotFound(_)
            | Rejection::DirectoryNoIndex(_) => StatusCode::NotFound,
            Rejection::FileReadFailure { .. } => StatusCode::InternalServerError,
        }
    }
}

pub struct Resolver<F = LocalFs> {
    root: PathBuf,
    fs: F,
    templates: &'static Templates,
}

impl Resolver<LocalFs> {
    /// Resolver over the local disk with the standard templates.
    pub fn local(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::new(root, LocalFs, &STANDARD_TEMPLATES)
    }
}

impl<F: Filesystem> Resolver<F> {
    /// Builds a resolver serving from `root`.
    ///
    /// The root is canonicalized here, once; it must exist and be a directory.
    pub fn new(
        root: impl AsRef<Path>,
        fs: F,
        templates: &'static Templates,
    ) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let canonical = fs
            .canonicalize(root)
            .with_context(|| format!("root directory {} is not accessible", root.display()))?;

        if fs.kind(&canonical) != EntryKind::Directory {
            anyhow::bail!("root {} is not a directory", canonical.display());
        }

        Ok(Self {
            root: canonical,
            fs,
            templates,
        })
    }

    /// Canonical root every request is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parses `buf` and produces the response for it.
    ///
    /// Returns `None` for an empty buffer: the peer went away and nothing
    /// should be sent.
    pub fn respond(&self, buf: &[u8]) -> Option<Response> {
        match parse_request(buf, &self.root) {
            Ok(request) => Some(self.resolve(&request)),
            Err(e) => self.reject(&e),
        }
    }

    /// Response for a request that failed to parse.
    pub fn reject(&self, err: &ParseError) -> Option<Response> {
        match err {
            ParseError::Empty => None,
            ParseError::MalformedRequestLine => {
                tracing::debug!(error = %err, "Rejecting request");
                Some(self.templates.response(StatusCode::BadRequest))
            }
        }
    }

    /// Runs the decision procedure for one request.
    pub fn resolve(&self, request: &Request) -> Response {
        match self.decide(request) {
            Ok(response) => response,
            Err(rejection) => {
                match &rejection {
                    Rejection::FileReadFailure { .. } => tracing::warn!(
                        method = request.method.as_str(),
                        target = %request.target,
                        error = %rejection,
                        "Failed to read file"
                    ),
                    _ => tracing::debug!(
                        method = request.method.as_str(),
                        target = %request.target,
                        reason = %rejection,
                        "Request rejected"
                    ),
                }
                self.templates.response(rejection.status())
            }
        }
    }

    fn decide(&self, request: &Request) -> Result<Response, Rejection> {
        if request.version != SUPPORTED_VERSION {
            return Err(Rejection::UnsupportedVersion(request.version.clone()));
        }

        if request.method != Method::GET {
            return Err(Rejection::UnsupportedMethod(request.method.as_str().to_string()));
        }

        // Lexical check first, nothing on disk is consulted for escaping paths
        if !request.resolved_path.starts_with(&self.root) {
            return Err(Rejection::PathTraversalRejected(request.resolved_path.clone()));
        }

        let real = self.contained(&request.resolved_path)?;

        match self.fs.kind(&real) {
            EntryKind::Directory => {
                if !request.is_directory_target() {
                    return Ok(Response::moved_permanently(format!("{}/", request.target)));
                }

                let index = real.join(INDEX_FILE);
                if self.fs.kind(&index) != EntryKind::File {
                    return Err(Rejection::DirectoryNoIndex(real));
                }

                let body = self.read_contained(&index)?;
                Ok(Response::ok(mime::TEXT_HTML, body))
            }
            EntryKind::File => {
                let body = self.read_contained(&real)?;
                Ok(Response::ok(content_type_for(&request.resolved_path), body))
            }
            EntryKind::Missing | EntryKind::Other => Err(Rejection::NotFound(real)),
        }
    }

    /// Canonical form of `path`, provided it exists and stays under the root.
    ///
    /// Catches symlinks that point out of the tree.
    fn contained(&self, path: &Path) -> Result<PathBuf, Rejection> {
        let real = self
            .fs
            .canonicalize(path)
            .map_err(|_| Rejection::NotFound(path.to_path_buf()))?;

        if !real.starts_with(&self.root) {
            return Err(Rejection::PathTraversalRejected(real));
        }

        Ok(real)
    }

    /// Re-checks containment and type right before reading.
    fn read_contained(&self, path: &Path) -> Result<Vec<u8>, Rejection> {
        let real = self.contained(path)?;
        if self.fs.kind(&real) != EntryKind::File {
            return Err(Rejection::NotFound(real));
        }

        self.fs.read_all(&real).map_err(|source| match source.kind() {
            // Removed between the check and the read
            io::ErrorKind::NotFound => Rejection::NotFound(real.clone()),
            _ => Rejection::FileReadFailure { path: real.clone(), source },
        })
    }
}
