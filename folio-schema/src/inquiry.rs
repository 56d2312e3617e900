use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use folio_core::document::Document;

use crate::{
    error::ValidationError,
    fields::{FieldReader, email_address},
    record::Record,
};

const DEFAULT_SOURCE: &str = "website";

/// A contact inquiry. Created through the API, never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    pub name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub message: Option<String>,
    pub source: String,
}

impl Document for Inquiry {
    fn collection_name() -> &'static str {
        "inquiry"
    }
}

impl Record for Inquiry {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;

        let inquiry = Inquiry {
            name: fields.required_string("name"),
            email: fields.required_string("email"),
            phone: fields.optional_string("phone"),
            project_type: fields.optional_string("project_type"),
            message: fields.optional_string("message"),
            source: fields.string_or("source", DEFAULT_SOURCE),
        };

        fields.finish(inquiry)
    }
}
