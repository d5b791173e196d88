//! Error translation.
//!
//! Every failure raised by the transport (an error status from the API or a
//! failed HTTP exchange) passes through one [`ErrorTranslator`] before it
//! reaches the caller. The default [`PassThrough`] translator hands the error
//! back untouched; install a different one with
//! [`DpClient::with_error_translator`] to map errors into a richer taxonomy.
//!
//! [`DpClient::with_error_translator`]: crate::DpClient::with_error_translator

use std::fmt;

use crate::error::Error;

/// Maps a transport failure into the error surfaced to the caller.
///
/// Implementations must always produce an error; there is no way to turn a
/// failure back into a successful payload.
pub trait ErrorTranslator: fmt::Debug + Send + Sync {
    /// Translate a transport failure.
    fn translate(&self, error: Error) -> Error;
}

/// Translator that returns every error unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl ErrorTranslator for PassThrough {
    #[inline]
    fn translate(&self, error: Error) -> Error {
        error
    }
}
