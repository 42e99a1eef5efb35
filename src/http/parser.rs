use crate::http::request::{Method, Request};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing was received; the peer closed or aborted the connection.
    #[error("empty request")]
    Empty,
    #[error("malformed request line")]
    MalformedRequestLine,
}

/// Parses the request line out of `buf` and resolves its target under `root`.
///
/// Only the first line is looked at. Header lines and any body are ignored.
pub fn parse_request(buf: &[u8], root: &Path) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::MalformedRequestLine)?;

    // Single spaces only; doubled spaces produce an empty token and are rejected
    let mut parts = line.split(' ');
    let method = next_token(&mut parts)?;
    let target = next_token(&mut parts)?;
    let version = next_token(&mut parts)?;

    if parts.next().is_some() {
        return Err(ParseError::MalformedRequestLine);
    }

    Ok(Request::new(Method::parse(method), target, version, root))
}

/// Whether a full request line has arrived.
pub fn request_line_complete(buf: &[u8]) -> bool {
    find_line_end(buf).is_some()
}

fn next_token<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, ParseError> {
    match parts.next() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ParseError::MalformedRequestLine),
    }
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
