//! JSON encoding of whole collections.
//!
//! A collection document is a JSON array whose elements are the serde
//! representation of the record type.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// Decode a collection document.
///
/// Anything other than a JSON array of well-formed records, including an
/// empty document, is a [`StoreError::Decode`].
pub fn decode_collection<T: DeserializeOwned>(text: &str) -> StoreResult<Vec<T>> {
    serde_json::from_str(text).map_err(StoreError::Decode)
}

/// Encode a collection document, indented when `pretty` is set.
pub fn encode_collection<T: Serialize>(records: &[T], pretty: bool) -> StoreResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    encoded.map_err(StoreError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_types::{Customer, CustomerId, Reservation};

    #[test]
    fn decodes_array_of_records() {
        let text = r#"[{"customer_id": 1, "name": "Ana", "email": "ana@example.com"}]"#;
        let customers: Vec<Customer> = decode_collection(text).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_id, CustomerId::new(1));
    }

    #[test]
    fn rejects_non_json() {
        let err = decode_collection::<Customer>("THIS IS NOT VALID JSON").unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        // An object instead of an array.
        assert!(decode_collection::<Customer>(r#"{"customer_id": 1}"#).is_err());
        // An array of records missing fields.
        assert!(decode_collection::<Reservation>(r#"[{"reservation_id": 1}]"#).is_err());
    }

    #[test]
    fn rejects_empty_document() {
        assert!(decode_collection::<Customer>("").is_err());
    }

    #[test]
    fn pretty_output_is_indented() {
        let records = vec![Customer::new(CustomerId::new(2), "Luis", "luis@example.com")];
        let compact = encode_collection(&records, false).unwrap();
        let pretty = encode_collection(&records, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  "));
    }
}
