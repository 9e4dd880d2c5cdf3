//! ElServe - Minimal Static File Server
//!
//! Core library for HTTP parsing and connection handling.

pub mod config;
pub mod http;
pub mod server;
