//! Docparser HTTP transport.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use url::Url;

use super::{DocumentContents, DpConfig, Endpoint, Payload};
use crate::error::{Error, Result};
use crate::translate::{ErrorTranslator, PassThrough};
use crate::{TRACING_TARGET_CLIENT, TRACING_TARGET_TRANSPORT};

/// Name of the header carrying the API token.
pub const API_KEY_HEADER: &str = "api_key";

/// Inner client that holds the HTTP client and configuration.
#[derive(Debug)]
struct DpClientInner {
    http: Client,
    config: DpConfig,
    base_url: Url,
    translator: Arc<dyn ErrorTranslator>,
}

/// HTTP transport for the Docparser API.
///
/// Issues GET, form POST and multipart POST requests, normalizes response
/// bodies into a [`Payload`] and routes every failure through the configured
/// [`ErrorTranslator`]. The API token is attached to every request as the
/// `api_key` header.
///
/// # Examples
///
/// ```rust,ignore
/// use docparser::{DpClient, DpConfig, Endpoint};
///
/// let client = DpClient::new(DpConfig::new("secret-token"))?;
/// let payload = client.get(&Endpoint::Parsers, &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DpClient {
    inner: Arc<DpClientInner>,
}

impl DpClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL or the API token cannot be
    /// used, or the HTTP client fails to build.
    pub fn new(config: DpConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::config(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %base_url,
            timeout = ?config.timeout(),
            "Docparser client initialized"
        );

        let inner = DpClientInner {
            http,
            config,
            base_url,
            translator: Arc::new(PassThrough),
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Replaces the error translator.
    pub fn with_error_translator(self, translator: impl ErrorTranslator + 'static) -> Self {
        let inner = DpClientInner {
            http: self.inner.http.clone(),
            config: self.inner.config.clone(),
            base_url: self.inner.base_url.clone(),
            translator: Arc::new(translator),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Get a reference to the client configuration.
    pub fn config(&self) -> &DpConfig {
        &self.inner.config
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Issues a GET request with the given query parameters.
    pub async fn get(&self, endpoint: &Endpoint, query: &[(&str, String)]) -> Result<Payload> {
        let url = endpoint.url(&self.inner.base_url);
        let request = self.inner.http.get(url).query(query);
        self.send(endpoint, request).await
    }

    /// Issues a form-encoded POST request.
    pub async fn post_form(&self, endpoint: &Endpoint, form: &[(&str, String)]) -> Result<Payload> {
        let url = endpoint.url(&self.inner.base_url);
        let request = self.inner.http.post(url).form(form);
        self.send(endpoint, request).await
    }

    /// Uploads a document as a multipart POST request.
    ///
    /// The body has two parts: `file` with the document contents (and the
    /// filename, when given) and `remote_id`, which is sent empty when absent.
    pub async fn upload(
        &self,
        endpoint: &Endpoint,
        contents: DocumentContents,
        remote_id: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Payload> {
        let mut file = contents.into_part().await?;
        if let Some(filename) = filename {
            file = file.file_name(filename.to_owned());
        }

        let form = Form::new()
            .part("file", file)
            .text("remote_id", remote_id.unwrap_or_default().to_owned());

        let url = endpoint.url(&self.inner.base_url);
        let request = self.inner.http.post(url).multipart(form);
        self.send(endpoint, request).await
    }

    /// Sends the request, passing any failure through the error translator.
    async fn send(&self, endpoint: &Endpoint, request: RequestBuilder) -> Result<Payload> {
        tracing::debug!(
            target: TRACING_TARGET_TRANSPORT,
            endpoint = %endpoint,
            "Sending request"
        );

        match self.execute(request).await {
            Ok(payload) => Ok(payload),
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET_TRANSPORT,
                    endpoint = %endpoint,
                    category = error.category(),
                    error = %error,
                    "Request failed"
                );
                Err(self.inner.translator.translate(error))
            }
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Payload> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            target: TRACING_TARGET_TRANSPORT,
            status = status.as_u16(),
            size = body.len(),
            "Received response"
        );

        if status.is_client_error() || status.is_server_error() {
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body
            };
            return Err(Error::api(status.as_u16(), message));
        }

        Ok(Payload::from_body(body))
    }
}
