use std::path::Path;

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a served file, from the text after the last `.` in its name.
///
/// ```
/// # use docroot::http::mime::content_type_for;
/// # use std::path::Path;
/// assert_eq!(content_type_for(Path::new("/www/base.css")), "text/css");
/// assert_eq!(content_type_for(Path::new("/www/logo.png")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext);

    match extension {
        Some("html") => TEXT_HTML,
        Some("css") => TEXT_CSS,
        _ => OCTET_STREAM,
    }
}
