//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: only the request line is read,
//! only GET is served, and every connection carries exactly one request.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving one request/response exchange
//! - **`parser`**: Extracts method, target and version from the request line
//! - **`request`**: Request representation and target resolution under the root
//! - **`resolver`**: Ordered decision procedure turning a request into a response
//! - **`response`**: Status codes, response builder and the canned body table
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: Content type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line (bounded by a timeout)
//!        └──────┬──────┘
//!               │ Request line received      (nothing received → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve against the root directory
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docroot::http::connection::Connection;
//! use docroot::http::resolver::Resolver;
//! use std::{sync::Arc, time::Duration};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = Arc::new(Resolver::local("./www")?);
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let resolver = Arc::clone(&resolver);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, resolver, Duration::from_secs(5));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
