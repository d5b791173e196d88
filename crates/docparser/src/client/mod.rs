//! Docparser HTTP client module.
//!
//! This module provides the transport layer: configuration, endpoints,
//! upload contents and response normalization.

mod contents;
mod dp_client;
mod dp_config;
mod endpoint;
mod payload;

pub use contents::DocumentContents;
pub use dp_client::{API_KEY_HEADER, DpClient};
pub use dp_config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DpConfig};
pub use endpoint::Endpoint;
pub use payload::{Payload, is_json};
