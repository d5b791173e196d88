#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client operations.
///
/// Use this target for client initialization and facade-level events.
pub const TRACING_TARGET_CLIENT: &str = "docparser::client";

/// Tracing target for HTTP requests and responses.
pub const TRACING_TARGET_TRANSPORT: &str = "docparser::transport";

mod client;
mod docparser;
pub mod error;
pub mod filter;
pub mod models;
mod options;
#[doc(hidden)]
pub mod prelude;
mod translate;

pub use crate::client::{
    API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DocumentContents, DpClient, DpConfig,
    Endpoint, Payload, is_json,
};
pub use crate::docparser::Docparser;
pub use crate::error::{Error, Result};
pub use crate::filter::{DateValue, ListFilter, ResultFormat, normalize_date};
pub use crate::options::{
    DEFAULT_LIMIT, ResultsOptions, ResultsOptionsBuilder, ResultsOptionsBuilderError,
};
pub use crate::translate::{ErrorTranslator, PassThrough};
