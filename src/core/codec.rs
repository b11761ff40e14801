//! Import/export codec for the catalog document
//!
//! Export is pretty-printed JSON. Import checks the top-level shape (all four
//! collection keys present) before deserializing, so a truncated or foreign
//! document is rejected with a per-key reason and the existing store is left
//! untouched. Unknown extra keys are ignored.

use thiserror::Error;

use crate::core::document::{Collection, Document};

/// Errors from parsing or serializing a catalog document
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("document is missing the '{0}' collection")]
    MissingCollection(Collection),
}

/// Serialize the document to pretty-printed JSON
pub fn to_json(document: &Document) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parse a catalog document, validating the top-level shape first
pub fn from_json(text: &str) -> Result<Document, CodecError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let object = value.as_object().ok_or(CodecError::NotAnObject)?;
    for collection in Collection::ALL {
        if !object.contains_key(collection.key()) {
            return Err(CodecError::MissingCollection(collection));
        }
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_import_is_idempotent() {
        let doc = Document::seed();
        let json = to_json(&doc).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_import_rejects_missing_collection() {
        let json = r#"{"drugs":[],"interactions":[],"categories":[]}"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingCollection(Collection::SeverityLevels)
        ));
    }

    #[test]
    fn test_import_rejects_non_object() {
        assert!(matches!(from_json("[1,2,3]"), Err(CodecError::NotAnObject)));
        assert!(matches!(from_json("not json"), Err(CodecError::Json(_))));
    }

    #[test]
    fn test_import_tolerates_extra_keys() {
        let json = r#"{
            "drugs": [],
            "interactions": [],
            "categories": [],
            "severityLevels": [],
            "exportedBy": "someone else's tool"
        }"#;
        let doc = from_json(json).unwrap();
        assert!(doc.drugs.is_empty());
    }

    #[test]
    fn test_import_accepts_foreign_id_schemes() {
        // Documents exported elsewhere may use their own id conventions
        let json = r#"{
            "drugs": [{"id": "d-1", "name": "Aspirin", "createdAt": "2024-01-01T00:00:00.000Z"}],
            "interactions": [],
            "categories": [{"id": "CAT001", "name": "Analgesics"}],
            "severityLevels": []
        }"#;
        let doc = from_json(json).unwrap();
        assert_eq!(doc.drugs[0].id, "d-1");
        assert_eq!(doc.drugs[0].generic_name, "");
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let json = to_json(&Document::seed()).unwrap();
        assert!(json.contains("\n"));
        assert!(json.contains("\"severityLevels\""));
    }
}
