use bson::Bson;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use folio_core::{
    document::{Document, DocumentExt},
    error::{StoreError, StoreResult},
};

use crate::error::ValidationError;

/// A validated record shape.
pub trait Record: Document + Validate {
    /// Validates raw input and builds the record, applying defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every missing, mistyped or out-of-bounds field.
    fn parse(raw: &Value) -> Result<Self, ValidationError>;

    /// Decodes a document read back from the store.
    ///
    /// Missing keys take their read defaults; the record's constraints are checked again
    /// so a bad stored document never reaches a response.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the document cannot be decoded and
    /// [`StoreError::InvalidDocument`] if it violates the record's constraints.
    fn from_stored(raw: Bson) -> StoreResult<Self> {
        let record = Self::from_bson(raw)?;

        record.validate().map_err(|errors| {
            StoreError::InvalidDocument(format!(
                "{} document: {}",
                Self::collection_name(),
                ValidationError::from(errors),
            ))
        })?;

        Ok(record)
    }
}

/// Reads an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
