use std::path::{Component, Path, PathBuf};

/// HTTP request methods.
///
/// Only GET is served. Every other token still parses so the resolver can
/// answer it with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    /// Any token outside the list above, kept verbatim
    Other(String),
}

impl Method {
    /// Parses a known HTTP method.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    /// Parses any method token, falling back to [`Method::Other`].
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| Method::Other(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

/// A parsed request line bound to the served root directory.
///
/// Built once per received buffer and never modified.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target exactly as received (e.g. "/sub")
    pub target: String,
    /// Protocol version token (e.g. "HTTP/1.1")
    pub version: String,
    /// Root joined with the target, with `.` and `..` folded away
    pub resolved_path: PathBuf,
}

impl Request {
    /// Creates a request, resolving `target` against `root`.
    ///
    /// `root` is expected to be absolute; the resolver hands out its
    /// canonical root for this purpose.
    pub fn new(
        method: Method,
        target: impl Into<String>,
        version: impl Into<String>,
        root: &Path,
    ) -> Self {
        let target = target.into();
        let resolved_path = resolve_target(root, &target);

        Self {
            method,
            target,
            version: version.into(),
            resolved_path,
        }
    }

    /// Whether the raw target names a directory (ends with `/`).
    pub fn is_directory_target(&self) -> bool {
        self.target.ends_with('/')
    }
}

/// Joins `target` onto `root` lexically.
///
/// `..` pops one component and is allowed to climb above `root`; callers
/// must check containment before touching the filesystem.
pub fn resolve_target(root: &Path, target: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in root.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other.as_os_str()),
        }
    }

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            name => resolved.push(name),
        }
    }

    resolved
}
