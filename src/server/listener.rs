use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pending-connection backlog for the listening socket.
const BACKLOG: u32 = 16;

/// Owns the listening socket for its whole lifetime; dropping the server
/// closes it. One task is spawned per accepted connection, so the accept
/// loop never blocks on request handling.
pub struct Server {
    listener: TcpListener,
    cfg: Arc<Config>,
}

impl Server {
    pub fn bind(cfg: Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .listen_addr()
            .parse()
            .with_context(|| format!("Invalid listen address {}", cfg.listen_addr()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("Unable to bind socket to {addr}"))?;

        let listener = socket.listen(BACKLOG)?;

        Ok(Self {
            listener,
            cfg: Arc::new(cfg),
        })
    }

    /// The actual bound address, useful when the configured port is 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    // Accept failures are transient; keep accepting.
                    error!("Unable to accept new connection: {e}");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let cfg = self.cfg.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, cfg);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
