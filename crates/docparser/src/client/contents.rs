//! Document contents accepted by the upload endpoint.

use bytes::Bytes;
use reqwest::Body;
use reqwest::multipart::Part;
use tokio::fs::File;
use tokio::io::AsyncSeekExt;
use tokio_util::io::ReaderStream;

use crate::error::Result;

/// Document contents to upload: an in-memory buffer or an open file.
///
/// Buffers are sent as-is; files are streamed from their current position.
#[derive(Debug)]
pub enum DocumentContents {
    /// In-memory document bytes.
    Bytes(Bytes),
    /// An open file handle, closed once the upload finishes.
    File(File),
}

impl DocumentContents {
    /// Returns `true` for an empty buffer.
    ///
    /// An open file is never empty: its contents are left for the API to judge.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::File(_) => false,
        }
    }

    /// Converts the contents into a multipart part.
    pub(crate) async fn into_part(self) -> Result<Part> {
        let part = match self {
            Self::Bytes(bytes) => {
                let length = bytes.len() as u64;
                Part::stream_with_length(Body::from(bytes), length)
            }
            Self::File(mut file) => {
                // Only what lies past the current position is streamed.
                let position = file.stream_position().await?;
                let length = file.metadata().await?.len().saturating_sub(position);
                let body = Body::wrap_stream(ReaderStream::new(file));
                Part::stream_with_length(body, length)
            }
        };

        Ok(part)
    }
}

impl From<Bytes> for DocumentContents {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for DocumentContents {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<&'static [u8]> for DocumentContents {
    fn from(bytes: &'static [u8]) -> Self {
        Self::Bytes(Bytes::from_static(bytes))
    }
}

impl From<String> for DocumentContents {
    fn from(text: String) -> Self {
        Self::Bytes(text.into())
    }
}

impl From<&'static str> for DocumentContents {
    fn from(text: &'static str) -> Self {
        Self::Bytes(Bytes::from_static(text.as_bytes()))
    }
}

impl From<File> for DocumentContents {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}
