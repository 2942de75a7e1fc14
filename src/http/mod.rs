//! HTTP request handling.
//!
//! This module implements the one-shot GET pipeline: each connection carries
//! exactly one request and is closed once the response (if any) is written.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: extracts the request path from the raw request head
//! - **`path`**: decides whether a request path is safe to resolve under
//!   the document root
//! - **`writer`**: writes one of the three fixed responses and half-closes
//!
//! # Connection state machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until "\r\n\r\n"
//!        └──────┬──────┘
//!               │
//!               ├─ stream closed early → Closed (no response)
//!               ├─ not a GET           → SendingNotImplemented → Closed
//!               ├─ unsafe path         → SendingNotFound → Closed
//!               ▼
//!        ┌──────────────────┐
//!        │   SendingFile    │ ← Stream the file after "200 OK"
//!        └──────┬───────────┘
//!               │
//!               ├─ open failed → SendingNotFound → Closed
//!               └─ sent → Closed
//! ```

pub mod connection;
pub mod parser;
pub mod path;
pub mod writer;
