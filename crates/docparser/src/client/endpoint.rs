//! Remote endpoints of the Docparser API.

use std::fmt;

use reqwest::Method;
use url::Url;

/// A request target on the Docparser API.
///
/// Identifiers are opaque: anything that renders through [`fmt::Display`] is
/// accepted and sent as a single, percent-encoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET ping`
    Ping,
    /// `GET parsers`
    Parsers,
    /// `GET parser/models/{parser_id}`
    ParserModels { parser_id: String },
    /// `POST document/upload/{parser_id}` (multipart)
    DocumentUpload { parser_id: String },
    /// `POST document/fetch/{parser_id}` (form)
    DocumentFetch { parser_id: String },
    /// `GET results/{parser_id}/{document_id}`
    DocumentResults {
        parser_id: String,
        document_id: String,
    },
    /// `GET results/{parser_id}`
    ParserResults { parser_id: String },
}

impl Endpoint {
    /// `parser/models/{parser_id}`
    pub fn parser_models(parser_id: impl fmt::Display) -> Self {
        Self::ParserModels {
            parser_id: parser_id.to_string(),
        }
    }

    /// `document/upload/{parser_id}`
    pub fn document_upload(parser_id: impl fmt::Display) -> Self {
        Self::DocumentUpload {
            parser_id: parser_id.to_string(),
        }
    }

    /// `document/fetch/{parser_id}`
    pub fn document_fetch(parser_id: impl fmt::Display) -> Self {
        Self::DocumentFetch {
            parser_id: parser_id.to_string(),
        }
    }

    /// `results/{parser_id}/{document_id}`
    pub fn document_results(parser_id: impl fmt::Display, document_id: impl fmt::Display) -> Self {
        Self::DocumentResults {
            parser_id: parser_id.to_string(),
            document_id: document_id.to_string(),
        }
    }

    /// `results/{parser_id}`
    pub fn parser_results(parser_id: impl fmt::Display) -> Self {
        Self::ParserResults {
            parser_id: parser_id.to_string(),
        }
    }

    /// HTTP method used by this endpoint.
    pub fn method(&self) -> Method {
        match self {
            Self::DocumentUpload { .. } | Self::DocumentFetch { .. } => Method::POST,
            _ => Method::GET,
        }
    }

    /// Path segments relative to the API base URL.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Ping => vec!["ping"],
            Self::Parsers => vec!["parsers"],
            Self::ParserModels { parser_id } => vec!["parser", "models", parser_id.as_str()],
            Self::DocumentUpload { parser_id } => vec!["document", "upload", parser_id.as_str()],
            Self::DocumentFetch { parser_id } => vec!["document", "fetch", parser_id.as_str()],
            Self::DocumentResults {
                parser_id,
                document_id,
            } => vec!["results", parser_id.as_str(), document_id.as_str()],
            Self::ParserResults { parser_id } => vec!["results", parser_id.as_str()],
        }
    }

    /// Resolves this endpoint against `base`, which must end with a slash.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(self.segments());
        }
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.segments().join("/"))
    }
}
