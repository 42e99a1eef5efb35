use docroot::http::request::{Method, Request, resolve_target};
use std::path::Path;

#[test]
fn test_request_resolves_target_under_root() {
    let req = Request::new(Method::GET, "/css/base.css", "HTTP/1.1", Path::new("/srv/www"));

    assert_eq!(req.resolved_path, Path::new("/srv/www/css/base.css"));
    assert_eq!(req.target, "/css/base.css");
}

#[test]
fn test_resolve_collapses_dot_segments() {
    let root = Path::new("/srv/www");

    assert_eq!(resolve_target(root, "/a/./b"), Path::new("/srv/www/a/b"));
    assert_eq!(resolve_target(root, "/a/../b"), Path::new("/srv/www/b"));
    assert_eq!(resolve_target(root, "//a///b"), Path::new("/srv/www/a/b"));
}

#[test]
fn test_resolve_may_climb_above_root() {
    let root = Path::new("/srv/www");

    assert_eq!(resolve_target(root, "/../../etc/passwd"), Path::new("/etc/passwd"));
    assert_eq!(resolve_target(root, "/../../../../.."), Path::new("/"));
}

#[test]
fn test_resolve_sibling_with_root_prefix_name() {
    // "/srv/www-private" shares a string prefix with the root but is not inside it
    let resolved = resolve_target(Path::new("/srv/www"), "/../www-private/key");

    assert_eq!(resolved, Path::new("/srv/www-private/key"));
    assert!(!resolved.starts_with("/srv/www"));
}

#[test]
fn test_request_directory_target() {
    let root = Path::new("/srv/www");

    assert!(Request::new(Method::GET, "/sub/", "HTTP/1.1", root).is_directory_target());
    assert!(!Request::new(Method::GET, "/sub", "HTTP/1.1", root).is_directory_target());
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}

#[test]
fn test_request_method_parse_falls_back() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    assert_eq!(Method::parse("get").as_str(), "get");
    assert_eq!(Method::DELETE.as_str(), "DELETE");
}
