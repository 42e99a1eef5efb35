//! Docroot - Static File Server
//!
//! Serves HTML and CSS from a single root directory over a minimal
//! HTTP/1.1 subset: one GET per connection, request line only.

pub mod config;
pub mod fs;
pub mod http;
pub mod server;
