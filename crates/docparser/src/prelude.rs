//! Prelude for the docparser crate
//!
//! This module re-exports the most commonly used types and traits from the crate
//! to provide a convenient single import for users.

pub use crate::client::{DocumentContents, DpClient, DpConfig, Payload};
pub use crate::docparser::Docparser;
pub use crate::error::{Error, Result};
pub use crate::filter::{DateValue, ListFilter, ResultFormat};
pub use crate::options::ResultsOptions;
pub use crate::translate::ErrorTranslator;
