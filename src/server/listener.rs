use anyhow::bail;
use std::path::PathBuf;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tracing::{info, warn};

use crate::http::connection::Connection;

const ACCEPT_BACKLOG: u32 = 128;

/// Resolves `host:port` and binds the first candidate address that can be
/// created, configured for address reuse, bound, and set listening.
///
/// Failure of any step moves on to the next candidate; a listener that
/// cannot be bound at all is a fatal startup condition for the caller.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    let mut last_err: Option<std::io::Error> = None;

    for addr in lookup_host((host, port)).await? {
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        };
        let socket = match socket {
            Ok(s) => s,
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        };

        if let Err(e) = socket.set_reuseaddr(true) {
            last_err = Some(e);
            continue;
        }
        if let Err(e) = socket.bind(addr) {
            last_err = Some(e);
            continue;
        }
        match socket.listen(ACCEPT_BACKLOG) {
            Ok(listener) => {
                info!("Listening on {}", addr);
                return Ok(listener);
            }
            Err(e) => last_err = Some(e),
        }
    }

    match last_err {
        Some(e) => Err(e.into()),
        None => bail!("no addresses resolved for {host}:{port}"),
    }
}

/// Accept loop: never returns under normal operation.
///
/// Each accepted connection is handed to a detached task; the loop goes
/// straight back to accepting. A failed accept is logged and retried, it
/// must never take the server down.
pub async fn run(listener: TcpListener, root: PathBuf) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
