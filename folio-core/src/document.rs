//! Core traits for records stored in a document store.
//!
//! Records carry no identity of their own; the store assigns one on insert.

use bson::{Bson, Document as BsonDocument, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Core trait that every persisted record type implements.
///
/// # Example
///
/// ```ignore
/// use folio_core::document::Document;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Project {
///     pub title: String,
/// }
///
/// impl Document for Project {
///     fn collection_name() -> &'static str {
///         "project"
///     }
/// }
/// ```
pub trait Document: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this record belongs to.
    ///
    /// This is the lowercase type name (e.g. "project", "inquiry").
    fn collection_name() -> &'static str;
}

/// Extension trait providing BSON conversions for records.
///
/// Automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Converts this record to a BSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_bson(&self) -> StoreResult<Bson>;

    /// Converts this record to a BSON document, the shape a backend stores.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the record is not a map.
    fn to_bson_document(&self) -> StoreResult<BsonDocument>;

    /// Creates a record from a BSON value read back from a store.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_bson(bson: Bson) -> StoreResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_bson(&self) -> StoreResult<Bson> {
        Ok(serialize_to_bson(self)?)
    }

    fn to_bson_document(&self) -> StoreResult<BsonDocument> {
        match self.to_bson()? {
            Bson::Document(document) => Ok(document),
            other => Err(StoreError::InvalidDocument(format!(
                "{} record serialized to {:?}, expected a document",
                D::collection_name(),
                other.element_type(),
            ))),
        }
    }

    fn from_bson(bson: Bson) -> StoreResult<Self> {
        Ok(deserialize_from_bson(bson)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
        #[serde(default)]
        pinned: bool,
    }

    impl Document for Note {
        fn collection_name() -> &'static str {
            "note"
        }
    }

    #[test]
    fn to_bson_document_keeps_fields() {
        let note = Note { text: "hello".into(), pinned: true };
        let document = note.to_bson_document().unwrap();

        assert_eq!(document, doc! { "text": "hello", "pinned": true });
    }

    #[test]
    fn from_bson_applies_serde_defaults_and_ignores_extra_keys() {
        let note = Note::from_bson(Bson::Document(doc! { "text": "hi", "created_at": 1 })).unwrap();

        assert_eq!(note, Note { text: "hi".into(), pinned: false });
    }

    #[test]
    fn from_bson_reports_type_mismatch_as_serialization_error() {
        let err = Note::from_bson(Bson::Document(doc! { "text": 42 })).unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
