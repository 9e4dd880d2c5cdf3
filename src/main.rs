mod config;
mod server;
mod http;

use config::Config;
use server::listener::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let srv = Server::bind(cfg)?;
    tracing::info!("Listening on http://{}", srv.local_addr()?);

    tokio::select! {
        res = srv.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
