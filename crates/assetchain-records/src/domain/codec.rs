//! # Record Codec
//!
//! JSON serialization of records to and from the ledger's byte-string value
//! representation. Every stored value carries a `docType` discriminator so
//! an undifferentiated range scan can classify it without knowing the key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::RecordError;

/// Serialize a record into its canonical stored representation.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, RecordError> {
    serde_json::to_vec(record).map_err(|e| RecordError::Encode {
        message: e.to_string(),
    })
}

/// Deserialize stored bytes into the expected entity shape.
///
/// `key` and `expected` only feed the error report; the codec itself is
/// schema-driven by `T`.
pub fn decode<T: DeserializeOwned>(
    key: &str,
    bytes: &[u8],
    expected: &'static str,
) -> Result<T, RecordError> {
    serde_json::from_slice(bytes).map_err(|e| RecordError::Decode {
        key: key.to_string(),
        expected,
        message: e.to_string(),
    })
}

/// Envelope used to classify a stored value by its discriminator alone.
#[derive(serde::Deserialize)]
struct DocTag {
    #[serde(rename = "docType", default)]
    doc_type: String,
}

/// Read the `docType` tag of a stored value, if it carries one.
///
/// Returns `None` when the bytes are not a JSON object or the tag is absent
/// or empty, meaning the value was not written by this layer's codec.
pub fn doc_type_of(bytes: &[u8]) -> Option<String> {
    match serde_json::from_slice::<DocTag>(bytes) {
        Ok(tag) if !tag.doc_type.is_empty() => Some(tag.doc_type),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Employee, Ticket, DOC_TYPE_EMPLOYEE};

    #[test]
    fn test_encode_decode_round_trip() {
        let employee = Employee::new("e1", "a@b.com", "Bob");
        let bytes = encode(&employee).unwrap();
        let back: Employee = decode("e1", &bytes, "employee").unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_doc_type_classification() {
        let bytes = encode(&Employee::new("e1", "a@b.com", "Bob")).unwrap();
        assert_eq!(doc_type_of(&bytes).as_deref(), Some(DOC_TYPE_EMPLOYEE));
    }

    #[test]
    fn test_foreign_values_have_no_tag() {
        assert_eq!(doc_type_of(b"\"just a string\""), None);
        assert_eq!(doc_type_of(b"{\"unrelated\":1}"), None);
        assert_eq!(doc_type_of(b"not json at all"), None);
    }

    #[test]
    fn test_decode_failure_names_key_and_shape() {
        let err = decode::<Ticket>("t9", b"{\"ticket_id\":7}", "ticket").unwrap_err();
        match err {
            RecordError::Decode { key, expected, .. } => {
                assert_eq!(key, "t9");
                assert_eq!(expected, "ticket");
            }
            other => panic!("expected decode failure, got {:?}", other),
        }
    }
}
