use bytes::BytesMut;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_request_path};
use crate::http::path;
use crate::http::writer;

const READ_CHUNK: usize = 2048;

/// Handles a single accepted connection end to end.
///
/// Owns the stream exclusively; the document root comes in as an immutable
/// value so handlers share nothing with each other.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    root: PathBuf,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    SendingFile(String),
    SendingNotFound,
    SendingNotImplemented,
    Closed,
}

/// Outcome of the read loop for one request head.
enum RequestStatus {
    Path(String),
    NotImplemented,
    /// Peer closed the stream before a full header terminator arrived;
    /// no response is owed.
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: PathBuf) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            root,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        RequestStatus::Path(p) if path::is_safe(&p) => {
                            ConnectionState::SendingFile(p)
                        }
                        RequestStatus::Path(_) => ConnectionState::SendingNotFound,
                        RequestStatus::NotImplemented => ConnectionState::SendingNotImplemented,
                        RequestStatus::Closed => ConnectionState::Closed,
                    };
                }

                ConnectionState::SendingFile(path) => {
                    let sent = writer::send_file(&mut self.stream, &self.root, &path).await?;
                    self.state = if sent {
                        ConnectionState::Closed
                    } else {
                        // File missing or not openable: same answer as an
                        // unsafe path.
                        ConnectionState::SendingNotFound
                    };
                }

                ConnectionState::SendingNotFound => {
                    writer::send_not_found(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::SendingNotImplemented => {
                    writer::send_not_implemented(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads in fixed-size chunks until the header terminator shows up,
    /// then extracts the request path. Headers past the request line are
    /// read but discarded.
    async fn read_request(&mut self) -> anyhow::Result<RequestStatus> {
        loop {
            match parse_request_path(&self.buffer) {
                Ok(path) => {
                    tracing::debug!("request for path {:?}", path);
                    return Ok(RequestStatus::Path(path));
                }

                Err(ParseError::NotImplemented) => {
                    return Ok(RequestStatus::NotImplemented);
                }

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                return Ok(RequestStatus::Closed);
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}
