//! Options for the bulk results endpoint.

use derive_builder::Builder;

use crate::error::{Error, Result};
use crate::filter::{DateValue, ListFilter, ResultFormat, normalize_date};

/// Default number of results returned by the bulk results endpoint.
pub const DEFAULT_LIMIT: u32 = 100;

/// Options for [`Docparser::results_by_parser`].
///
/// `limit` comes before `list` here because it is the option most callers
/// reach for.
///
/// # Examples
///
/// ```rust,ignore
/// use docparser::{ListFilter, ResultsOptions};
///
/// let options = ResultsOptions::builder()
///     .with_limit(5u32)
///     .with_list(ListFilter::UploadedAfter)
///     .with_date("2024-03-01")
///     .build()?;
/// ```
///
/// [`Docparser::results_by_parser`]: crate::Docparser::results_by_parser
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(
    name = "ResultsOptionsBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    default
)]
pub struct ResultsOptions {
    /// Maximum number of results
    pub limit: u32,
    /// Which documents to return
    pub list: ListFilter,
    /// Shape of the returned results
    pub format: ResultFormat,
    /// Only return documents uploaded with this remote id
    pub remote_id: Option<String>,
    /// Date the list filter is relative to; the current time when unset
    pub date: Option<DateValue>,
    /// Include documents still waiting to be processed
    pub include_processing_queue: bool,
}

impl Default for ResultsOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            list: ListFilter::default(),
            format: ResultFormat::default(),
            remote_id: None,
            date: None,
            include_processing_queue: false,
        }
    }
}

impl ResultsOptions {
    /// Create a new options builder
    pub fn builder() -> ResultsOptionsBuilder {
        ResultsOptionsBuilder::default()
    }

    /// Renders the options as query parameters, in the order
    /// `format, list, limit, date, remote_id, include_processing_queue`.
    ///
    /// `remote_id` is left out when unset.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>> {
        let date = match &self.date {
            Some(date) => normalize_date(Some(date))?,
            None => normalize_date(Some(&DateValue::now()))?,
        };

        let mut query = vec![
            ("format", self.format.to_string()),
            ("list", self.list.to_string()),
            ("limit", self.limit.to_string()),
            ("date", date),
        ];

        if let Some(remote_id) = &self.remote_id {
            query.push(("remote_id", remote_id.clone()));
        }

        query.push((
            "include_processing_queue",
            self.include_processing_queue.to_string(),
        ));

        Ok(query)
    }
}

impl ResultsOptionsBuilder {
    /// Sets the list filter from free-form text.
    ///
    /// Unrecognized values fall back to [`ListFilter::LastUploaded`].
    pub fn with_list_input(self, input: impl AsRef<str>) -> Self {
        self.with_list(ListFilter::from_input(input))
    }
}

impl From<ResultsOptionsBuilderError> for Error {
    fn from(error: ResultsOptionsBuilderError) -> Self {
        Error::invalid_input(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::EPOCH;

    fn value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_defaults() {
        let options = ResultsOptions::builder().build().unwrap();
        assert_eq!(options, ResultsOptions::default());
        assert_eq!(options.limit, 100);
        assert_eq!(options.list, ListFilter::LastUploaded);
        assert_eq!(options.format, ResultFormat::Object);
        assert!(options.remote_id.is_none());
        assert!(!options.include_processing_queue);
    }

    #[test]
    fn test_query_order_and_values() {
        let options = ResultsOptions::builder()
            .with_limit(5u32)
            .with_list(ListFilter::UploadedAfter)
            .with_remote_id("invoice-7")
            .with_date("")
            .with_include_processing_queue(true)
            .build()
            .unwrap();

        let query = options.to_query().unwrap();
        let names: Vec<_> = query.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["format", "list", "limit", "date", "remote_id", "include_processing_queue"]
        );
        assert_eq!(value(&query, "format"), Some("object"));
        assert_eq!(value(&query, "list"), Some("uploaded_after"));
        assert_eq!(value(&query, "limit"), Some("5"));
        assert_eq!(value(&query, "date"), Some(EPOCH));
        assert_eq!(value(&query, "remote_id"), Some("invoice-7"));
        assert_eq!(value(&query, "include_processing_queue"), Some("true"));
    }

    #[test]
    fn test_remote_id_omitted_when_unset() {
        let query = ResultsOptions::default().to_query().unwrap();
        assert!(value(&query, "remote_id").is_none());
        assert_eq!(value(&query, "include_processing_queue"), Some("false"));
    }

    #[test]
    fn test_list_input_is_coerced() {
        let options = ResultsOptions::builder()
            .with_list_input("bogus")
            .build()
            .unwrap();
        assert_eq!(options.list, ListFilter::LastUploaded);

        let options = ResultsOptions::builder()
            .with_list_input("processed_after")
            .build()
            .unwrap();
        assert_eq!(options.list, ListFilter::ProcessedAfter);
    }

    #[test]
    fn test_invalid_date_fails_query() {
        let options = ResultsOptions::builder()
            .with_date("not a date")
            .build()
            .unwrap();
        assert!(matches!(options.to_query(), Err(Error::InvalidInput { .. })));
    }
}
