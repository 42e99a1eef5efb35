/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File or directory index served
/// - `MovedPermanently` (301): Directory requested without a trailing slash
/// - `BadRequest` (400): Request line could not be parsed
/// - `NotFound` (404): Missing, escaping, or unreadable path
/// - `MethodNotAllowed` (405): Anything other than GET
/// - `InternalServerError` (500): File could not be read
/// - `HttpVersionNotSupported` (505): Anything other than HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the reason phrase written on the status line.
    ///
    /// 505 keeps the short "HTTP Version Not Support" phrase existing
    /// clients already match on.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Support",
        }
    }
}

/// The table every server instance is built with.
pub static STANDARD_TEMPLATES: Templates = Templates::STANDARD;

/// Fixed body text for each error status.
///
/// One process-wide table, handed to the resolver by reference.
#[derive(Debug)]
pub struct Templates {
    entries: &'static [(StatusCode, &'static str)],
}

impl Templates {
    pub const STANDARD: Templates = Templates {
        entries: &[
            (StatusCode::BadRequest, "Malformed request line"),
            (StatusCode::NotFound, "404 Error! File not found!"),
            (
                StatusCode::MethodNotAllowed,
                "The specific request method is not allowed",
            ),
            (StatusCode::InternalServerError, "Internal server error"),
            (
                StatusCode::HttpVersionNotSupported,
                "The specific HTTP version is not supported",
            ),
        ],
    };

    pub const fn new(entries: &'static [(StatusCode, &'static str)]) -> Self {
        Self { entries }
    }

    /// Body text registered for `status`, if any.
    pub fn body(&self, status: StatusCode) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, body)| *body)
    }

    /// Builds the canned response for `status`.
    pub fn response(&self, status: StatusCode) -> Response {
        let builder = ResponseBuilder::new(status);
        match self.body(status) {
            Some(body) => builder.body(body.as_bytes().to_vec()).build(),
            None => builder.build(),
        }
    }
}

/// A complete HTTP response ready to be serialized.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body, if the status carries one
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body(b"body {}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Order is preserved on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK carrying `body` as `content_type`.
    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body.into())
            .build()
    }

    /// 301 pointing the client at `location`.
    pub fn moved_permanently(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::MovedPermanently)
            .header("Location", location)
            .build()
    }

    /// First header value matching `key`, compared case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
