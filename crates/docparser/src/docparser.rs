//! Developer-facing Docparser API.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::File;

use crate::TRACING_TARGET_CLIENT;
use crate::client::{DocumentContents, DpClient, DpConfig, Endpoint, Payload};
use crate::error::{Error, Result};
use crate::filter::ResultFormat;
use crate::options::ResultsOptions;

/// Client for the Docparser API.
///
/// Every method performs a single HTTP round trip. Parser and document
/// identifiers are opaque and passed through as given.
///
/// # Examples
///
/// ```rust,ignore
/// use docparser::{Docparser, ListFilter, ResultsOptions};
///
/// let docparser = Docparser::new("secret-token")?;
/// assert!(docparser.ping().await?);
///
/// let receipt = docparser
///     .upload_document_by_path("parser-id", "invoice.pdf", Some("invoice-7"))
///     .await?;
///
/// let options = ResultsOptions::builder()
///     .with_limit(5u32)
///     .with_list(ListFilter::UploadedAfter)
///     .build()?;
/// let results = docparser.results_by_parser("parser-id", &options).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Docparser {
    client: DpClient,
}

impl Docparser {
    /// Create a client for the public API with the given token.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(DpConfig::new(api_key))
    }

    /// Create a client from a full configuration.
    pub fn from_config(config: DpConfig) -> Result<Self> {
        Ok(Self::from_client(DpClient::new(config)?))
    }

    /// Wrap an existing transport.
    pub fn from_client(client: DpClient) -> Self {
        Self { client }
    }

    /// The underlying transport.
    pub fn client(&self) -> &DpClient {
        &self.client
    }

    /// Checks that the API is reachable and the token is accepted.
    ///
    /// # Errors
    ///
    /// An invalid token is answered with an error status, which is returned as
    /// the translated error rather than `Ok(false)`.
    pub async fn ping(&self) -> Result<bool> {
        let payload = self.client.get(&Endpoint::Ping, &[]).await?;
        Ok(payload.is_truthy())
    }

    /// Lists the parsers configured on the account.
    pub async fn parsers(&self) -> Result<Payload> {
        self.client.get(&Endpoint::Parsers, &[]).await
    }

    /// Lists the model layouts of a parser.
    pub async fn parser_model_layouts(&self, parser_id: impl fmt::Display) -> Result<Payload> {
        self.client
            .get(&Endpoint::parser_models(parser_id), &[])
            .await
    }

    /// Uploads the file at `path` to a parser.
    ///
    /// The file's base name is sent as the upload filename.
    ///
    /// # Errors
    ///
    /// Fails without contacting the API if `path` does not exist or is a
    /// directory. Empty files are sent as-is.
    pub async fn upload_document_by_path(
        &self,
        parser_id: impl fmt::Display,
        path: impl AsRef<Path>,
        remote_id: Option<&str>,
    ) -> Result<Payload> {
        let path = path.as_ref();

        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::invalid_input("No such file."));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        if metadata.is_dir() {
            return Err(Error::invalid_input("Passed a directory, expected file."));
        }

        let file = File::open(path).await?;
        let filename = path.file_name().and_then(|name| name.to_str());

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            path = %path.display(),
            size = metadata.len(),
            "Uploading document from path"
        );

        self.upload_document_by_contents(parser_id, file, remote_id, filename)
            .await
    }

    /// Uploads document contents to a parser.
    ///
    /// # Errors
    ///
    /// Fails without contacting the API if an in-memory buffer is empty.
    /// File handles are streamed from their current position.
    pub async fn upload_document_by_contents(
        &self,
        parser_id: impl fmt::Display,
        contents: impl Into<DocumentContents>,
        remote_id: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Payload> {
        let contents = contents.into();
        if contents.is_empty() {
            return Err(Error::invalid_input("Given file (handle) is empty"));
        }

        let endpoint = Endpoint::document_upload(parser_id);
        self.client
            .upload(&endpoint, contents, remote_id, filename)
            .await
    }

    /// Asks the API to download and parse a publicly reachable document.
    ///
    /// The URL is not validated locally.
    pub async fn fetch_document_from_url(
        &self,
        parser_id: impl fmt::Display,
        url: impl AsRef<str>,
        remote_id: Option<&str>,
    ) -> Result<Payload> {
        let mut form = vec![("url", url.as_ref().to_owned())];
        if let Some(remote_id) = remote_id {
            form.push(("remote_id", remote_id.to_owned()));
        }

        let endpoint = Endpoint::document_fetch(parser_id);
        self.client.post_form(&endpoint, &form).await
    }

    /// Fetches the parsed data of a single document.
    pub async fn results_by_document(
        &self,
        parser_id: impl fmt::Display,
        document_id: impl fmt::Display,
        format: ResultFormat,
    ) -> Result<Payload> {
        let endpoint = Endpoint::document_results(parser_id, document_id);
        self.client
            .get(&endpoint, &[("format", format.to_string())])
            .await
    }

    /// Fetches the parsed data of many documents of a parser.
    ///
    /// Prefer webhooks over polling this endpoint.
    ///
    /// # Errors
    ///
    /// Fails without contacting the API if the date option cannot be read.
    pub async fn results_by_parser(
        &self,
        parser_id: impl fmt::Display,
        options: &ResultsOptions,
    ) -> Result<Payload> {
        let query = options.to_query()?;
        let endpoint = Endpoint::parser_results(parser_id);
        self.client.get(&endpoint, &query).await
    }
}
