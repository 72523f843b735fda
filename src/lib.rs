//! Hearth - Minimal HTTP/1.1 Responder
//!
//! Core library for bounded request framing and response writing.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
