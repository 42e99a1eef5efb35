use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::fs::Filesystem;
use crate::http::connection::Connection;
use crate::http::resolver::Resolver;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let resolver = Arc::new(Resolver::local(&cfg.static_files.root)?);
    info!("Serving files from {}", resolver.root().display());

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, resolver, cfg.server.read_timeout()).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve<F: Filesystem>(
    listener: TcpListener,
    resolver: Arc<Resolver<F>>,
    read_timeout: Duration,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, resolver, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
