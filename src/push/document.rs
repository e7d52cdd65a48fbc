//! Document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::push::error::PushError;

/// A caller-defined record submitted for indexing.
///
/// The identifier doubles as the idempotency key in the request's query
/// string; everything else is opaque payload serialized into the request
/// body alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier of the document within its source.
    #[serde(rename = "documentId")]
    pub document_id: String,

    /// Remaining fields, passed through to the push service untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a document with the given identifier and no other fields.
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            fields: Map::new(),
        }
    }

    /// Attach a payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Convert an arbitrary JSON value into a document.
    ///
    /// Rejects values that are not objects and objects without a non-empty
    /// string `documentId`, before any request is issued.
    pub fn from_value(value: Value) -> Result<Self, PushError> {
        let Value::Object(mut fields) = value else {
            return Err(PushError::InvalidDocument);
        };

        let document_id = match fields.remove("documentId") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return Err(PushError::MissingDocumentId),
        };

        Ok(Self {
            document_id,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let doc = Document::from_value(json!({"documentId": "doc1", "data": "x"}))
            .expect("valid document");
        assert_eq!(doc.document_id, "doc1");
        assert_eq!(doc.fields.get("data"), Some(&json!("x")));
    }

    #[test]
    fn test_from_value_missing_id() {
        let err = Document::from_value(json!({"data": "x"})).unwrap_err();
        assert!(matches!(err, PushError::MissingDocumentId));
    }

    #[test]
    fn test_from_value_empty_id() {
        let err = Document::from_value(json!({"documentId": "", "data": "x"})).unwrap_err();
        assert!(matches!(err, PushError::MissingDocumentId));
    }

    #[test]
    fn test_from_value_non_object() {
        let err = Document::from_value(json!(["doc1"])).unwrap_err();
        assert!(matches!(err, PushError::InvalidDocument));
    }

    #[test]
    fn test_serialization_includes_id() {
        let doc = Document::new("doc1").with_field("data", "x");
        let body = serde_json::to_value(&doc).expect("serializable");
        assert_eq!(body, json!({"documentId": "doc1", "data": "x"}));
    }
}
