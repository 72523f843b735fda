use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::content;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    let body = content::hello_page();

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let body = body.clone();
        let deadline = cfg.request_timeout;
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, body);
            match tokio::time::timeout(deadline, conn.run()).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Connection error from {}: {}", peer, e),
                Err(_) => error!("Connection from {} timed out", peer),
            }
            // socket dropped here; the connection closes regardless of outcome
        });
    }
}
