//! Request-head parsing.
//!
//! Pure functions over the accumulated byte buffer; the connection handler
//! owns the read loop and calls in here after every chunk.

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The header terminator has not arrived yet.
    Incomplete,
    /// The request line is not a `GET /` request.
    NotImplemented,
}

/// Position of the `\r\n\r\n` header terminator, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Extracts the request path from a buffered request head.
///
/// Requires the terminator to be present. The path is whatever follows the
/// literal `GET /` in the request line, cut at the next space (so
/// `GET / HTTP/1.1` yields the empty path). Headers are detected only to
/// find the terminator and are otherwise discarded; no URL decoding, no
/// query-string handling.
pub fn parse_request_path(buf: &[u8]) -> Result<String, ParseError> {
    find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let line_end = buf
        .windows(2)
        .position(|w| w == b"\r\n")
        .ok_or(ParseError::Incomplete)?;
    let line = String::from_utf8_lossy(&buf[..line_end]);

    let get = line.find("GET /").ok_or(ParseError::NotImplemented)?;
    let rest = &line[get + 5..];
    let path = match rest.find(' ') {
        Some(space) => &rest[..space],
        None => rest,
    };

    Ok(path.to_string())
}
