//! HTTP protocol implementation.
//!
//! This module implements a deliberately small slice of HTTP/1.1: read one
//! request's start-line and headers under a hard size ceiling, answer with a
//! single `Connection: close` response, and let the caller drop the socket.
//!
//! # Architecture
//!
//! - **`frame`**: reads a connection byte-by-byte up to the `\r\n\r\n`
//!   header terminator, bounded by a capacity limit
//! - **`parser`**: tokenizes the delimited header block into a request line
//!   and a name/value header map
//! - **`response`**: response representation and status codes
//! - **`writer`**: serializes and writes HTTP responses to the client
//! - **`connection`**: the per-connection handler tying the above together
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine; no state is
//! revisited and `Closed` is terminal:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Frame the request headers
//!        └──────┬──────┘
//!               │ Headers framed, too large, or read failed
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Write 200 / 413 / 400
//!        └──────┬───────────┘
//!               │ Response flushed
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Caller drops the socket
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod frame;
pub mod parser;
pub mod response;
pub mod writer;
