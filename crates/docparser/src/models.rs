//! Typed views of common API payloads.
//!
//! The client returns [`Payload`] values untouched; these models are an opt-in
//! convenience, decoded with [`Payload::deserialize`].
//!
//! [`Payload`]: crate::Payload
//! [`Payload::deserialize`]: crate::Payload::deserialize

use serde::{Deserialize, Serialize};

/// A parser configured on the account, as listed by `GET parsers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserInfo {
    /// Parser identifier
    pub id: String,
    /// Human-readable parser name
    pub label: String,
}

/// Answer to a document upload or fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Identifier of the new document
    pub id: String,
    /// Size of the uploaded file in bytes
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Documents used in the current quota period
    #[serde(default)]
    pub quota_used: Option<u64>,
    /// Documents left in the current quota period
    #[serde(default)]
    pub quota_left: Option<u64>,
    /// When the quota is refilled
    #[serde(default)]
    pub quota_refill: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Payload;

    #[test]
    fn test_decode_parsers() {
        let payload = Payload::Json(json!([
            {"id": "abcdefghijk", "label": "Invoices"},
            {"id": "lmnopqrstuv", "label": "Receipts"}
        ]));

        let parsers: Vec<ParserInfo> = payload.deserialize().unwrap();
        assert_eq!(parsers.len(), 2);
        assert_eq!(parsers[1].label, "Receipts");
    }

    #[test]
    fn test_decode_upload_receipt() {
        let payload = Payload::Json(json!({
            "id": "document_id",
            "file_size": 198989,
            "quota_used": 16,
            "quota_left": 34,
            "quota_refill": "1970-01-01T00:00:00+00:00"
        }));

        let receipt: UploadReceipt = payload.deserialize().unwrap();
        assert_eq!(receipt.id, "document_id");
        assert_eq!(receipt.quota_left, Some(34));
    }

    #[test]
    fn test_decode_mismatch() {
        let payload = Payload::Raw("Forbidden".to_string());
        let result = payload.deserialize::<UploadReceipt>();
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
