//! staticd - Minimal single-root static file server
//!
//! Core library for listening-socket setup and per-connection request handling.

pub mod config;
pub mod http;
pub mod server;
