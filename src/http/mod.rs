//! HTTP protocol implementation.
//!
//! This module implements the request-ingestion pipeline for a minimal
//! HTTP/1.x static file server: one request per connection, no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving the request-response state machine
//! - **`parser`**: Parses an incoming HTTP request from a byte buffer
//! - **`request`**: HTTP request representation and header lookup
//! - **`headers`**: Last-write-wins header table owned by a request
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes the response header block and streams file bodies
//! - **`mime`**: Content-type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │ ← Read the first bytes off the socket
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsed        │ ← Resolve URL against the document root
//!        └──────┬───────────┘
//!               │ File opened
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolved       │ ← Send headers, stream the file body
//!        └──────┬───────────┘
//!               │
//!               ▼ (read/parse/open/send failures also land here)
//!        ┌──────────────────┐
//!        │    Closed        │
//!        └──────────────────┘
//! ```

pub mod headers;
pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
