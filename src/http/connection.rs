use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::fs::{Filesystem, LocalFs};
use crate::http::parser::{parse_request, request_line_complete};
use crate::http::request::Request;
use crate::http::resolver::Resolver;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on bytes buffered while waiting for the request line
pub const MAX_REQUEST_LINE: usize = 8192;

pub struct Connection<S, F = LocalFs> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    resolver: Arc<Resolver<F>>,
    read_timeout: Duration,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S, F> Connection<S, F>
where
    S: AsyncRead + AsyncWrite + Unpin,
    F: Filesystem,
{
    pub fn new(stream: S, resolver: Arc<Resolver<F>>, read_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(1024),
            state: ConnectionState::Reading,
            resolver,
            read_timeout,
        }
    }

    /// Serves exactly one request, then closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if !self.read_request().await? {
                        // Peer closed or timed out; nothing to answer
                        ConnectionState::Closed
                    } else {
                        match parse_request(&self.buffer, self.resolver.root()) {
                            Ok(request) => ConnectionState::Processing(request),
                            Err(e) => match self.resolver.reject(&e) {
                                Some(response) => {
                                    log_response(None, &response);
                                    ConnectionState::Writing(ResponseWriter::new(&response))
                                }
                                None => ConnectionState::Closed,
                            },
                        }
                    }
                }

                ConnectionState::Processing(request) => {
                    let response = self.process(request).await?;
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => {
                    break;
                }
            };
        }

        Ok(())
    }

    /// Buffers bytes until the request line is complete.
    ///
    /// Returns `false` when nothing usable arrived: the peer closed before
    /// sending anything, or the read timeout expired.
    pub async fn read_request(&mut self) -> anyhow::Result<bool> {
        let read = timeout(self.read_timeout, self.fill_buffer()).await;
        match read {
            Ok(result) => {
                result?;
                Ok(!self.buffer.is_empty())
            }
            Err(_) => {
                tracing::debug!(
                    buffered = self.buffer.len(),
                    "Timed out waiting for request line"
                );
                Ok(false)
            }
        }
    }

    async fn fill_buffer(&mut self) -> std::io::Result<()> {
        let mut temp = [0u8; 1024];

        while !request_line_complete(&self.buffer) && self.buffer.len() < MAX_REQUEST_LINE {
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed; parse whatever we have
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        Ok(())
    }

    async fn process(&self, request: Request) -> anyhow::Result<Response> {
        let resolver = Arc::clone(&self.resolver);

        // File reads block, keep them off the async workers
        let (request, response) = tokio::task::spawn_blocking(move || {
            let response = resolver.resolve(&request);
            (request, response)
        })
        .await?;

        log_response(Some(&request), &response);
        Ok(response)
    }
}

fn log_response(request: Option<&Request>, response: &Response) {
    match request {
        Some(req) => tracing::info!(
            method = req.method.as_str(),
            target = %req.target,
            status = response.status.as_u16(),
            "Request served"
        ),
        None => tracing::info!(
            status = response.status.as_u16(),
            "Unparseable request answered"
        ),
    }
}
