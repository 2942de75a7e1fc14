//! Fixed-shape responses.
//!
//! Every response is a bare status line with no headers; end-of-body is
//! signaled by half-closing the write side of the connection. Clients keep
//! their read side usable so unread request bytes can drain.

use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::info;

const STATUS_OK: &[u8] = b"HTTP/1.1 200 OK\r\n\r\n";
const STATUS_NOT_FOUND: &[u8] = b"HTTP/1.1 404 Not Found\r\n\r\n";
const STATUS_NOT_IMPLEMENTED: &[u8] = b"HTTP/1.1 501 Not Implemented\r\n\r\n";

const FILE_CHUNK: usize = 2048;

/// Streams `root/path` to the client behind a `200 OK` status line.
///
/// Returns `Ok(false)` without writing anything when the target cannot be
/// opened or is not a regular file; the caller falls back to a 404.
pub async fn send_file(stream: &mut TcpStream, root: &Path, path: &str) -> anyhow::Result<bool> {
    let mut file = match File::open(root.join(path)).await {
        Ok(f) => f,
        Err(_) => return Ok(false),
    };
    match file.metadata().await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(false),
    }

    stream.write_all(STATUS_OK).await?;

    let mut chunk = [0u8; FILE_CHUNK];
    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&chunk[..n]).await?;
    }
    stream.shutdown().await?;

    info!("[HTTP 200] sent file {}", path);
    Ok(true)
}

pub async fn send_not_found(stream: &mut TcpStream) -> anyhow::Result<()> {
    stream.write_all(STATUS_NOT_FOUND).await?;
    stream.shutdown().await?;

    info!("[HTTP 404]");
    Ok(())
}

pub async fn send_not_implemented(stream: &mut TcpStream) -> anyhow::Result<()> {
    stream.write_all(STATUS_NOT_IMPLEMENTED).await?;
    stream.shutdown().await?;

    info!("[HTTP 501]");
    Ok(())
}
