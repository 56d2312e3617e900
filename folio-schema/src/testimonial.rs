use bson::Bson;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use validator::Validate;

use folio_core::document::Document;

use crate::{
    error::ValidationError,
    fields::FieldReader,
    record::{Record, null_as_default},
};

const DEFAULT_RATING: i64 = 5;

/// A client testimonial. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_rating", deserialize_with = "rating_or_default")]
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
}

fn default_rating() -> i64 {
    DEFAULT_RATING
}

/// Stored ratings may be int32, int64 or an integral double such as `5.0`.
fn rating_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(DEFAULT_RATING),
        Some(Bson::Int32(n)) => Ok(i64::from(n)),
        Some(Bson::Int64(n)) => Ok(n),
        Some(Bson::Double(n)) if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => Ok(n as i64),
        Some(other) => Err(D::Error::custom(format!(
            "rating must be an integer, got {other}"
        ))),
    }
}

impl Document for Testimonial {
    fn collection_name() -> &'static str {
        "testimonial"
    }
}

impl Record for Testimonial {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;

        let testimonial = Testimonial {
            client_name: fields.required_string("client_name"),
            project_type: fields.required_string("project_type"),
            quote: fields.required_string("quote"),
            avatar: fields.optional_string("avatar"),
            rating: fields.integer_or("rating", DEFAULT_RATING),
        };

        fields.finish(testimonial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use bson::doc;
    use folio_core::error::StoreError;
    use serde_json::json;

    fn raw(rating: Value) -> Value {
        json!({
            "client_name": "Aarav K.",
            "project_type": "Home",
            "quote": "Lovely work.",
            "rating": rating,
        })
    }

    #[test]
    fn rating_defaults_to_five() {
        let mut input = raw(json!(null));
        input.as_object_mut().unwrap().remove("rating");

        assert_eq!(Testimonial::parse(&input).unwrap().rating, 5);
        assert_eq!(Testimonial::parse(&raw(json!(null))).unwrap().rating, 5);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(Testimonial::parse(&raw(json!(1))).unwrap().rating, 1);
        assert_eq!(Testimonial::parse(&raw(json!(5.0))).unwrap().rating, 5);

        let err = Testimonial::parse(&raw(json!(6))).unwrap_err();
        assert_eq!(
            err.violation("rating"),
            Some(&Violation::OutOfRange { min: Some(1.0), max: Some(5.0) })
        );

        assert!(Testimonial::parse(&raw(json!(0))).is_err());
    }

    #[test]
    fn parse_enumerates_missing_fields() {
        let err = Testimonial::parse(&json!({ "rating": 9 })).unwrap_err();
        let fields = err.errors().iter().map(|e| e.field.as_str()).collect::<Vec<_>>();

        assert_eq!(fields, vec!["client_name", "project_type", "quote", "rating"]);
    }

    #[test]
    fn stored_without_rating_reads_back_as_five() {
        let testimonial = Testimonial::from_stored(Bson::Document(doc! {
            "client_name": "Meera S.",
            "project_type": "Office",
            "quote": "Calm and bright.",
        }))
        .unwrap();

        assert_eq!(testimonial.rating, 5);

        let nulled = Testimonial::from_stored(Bson::Document(doc! { "rating": Bson::Null })).unwrap();
        assert_eq!(nulled.rating, 5);
        assert_eq!(nulled.client_name, "");
    }

    #[test]
    fn stored_integral_double_rating_is_accepted() {
        let testimonial = Testimonial::from_stored(Bson::Document(doc! {
            "client_name": "Ravi P.",
            "project_type": "Decor",
            "quote": "Lovely.",
            "rating": 5.0,
        }))
        .unwrap();
        assert_eq!(testimonial.rating, 5);

        let int32 = Testimonial::from_stored(Bson::Document(doc! { "rating": 3_i32 })).unwrap();
        assert_eq!(int32.rating, 3);
    }

    #[test]
    fn stored_fractional_rating_is_rejected() {
        let err = Testimonial::from_stored(Bson::Document(doc! { "rating": 4.5 })).unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn stored_double_rating_still_range_checked() {
        let err = Testimonial::from_stored(Bson::Document(doc! { "rating": 6.0 })).unwrap_err();

        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }

    #[test]
    fn stored_rating_out_of_range_is_invalid() {
        let err = Testimonial::from_stored(Bson::Document(doc! { "rating": 9 })).unwrap_err();

        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }
}
