use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use folio_core::document::Document;

use crate::{
    error::ValidationError,
    fields::FieldReader,
    record::{Record, null_as_default},
};

const DEFAULT_CATEGORY: &str = "Home";

/// A portfolio project. Read-only through the API.
///
/// `category` is free text; Home, Office, Furniture and Decor are the conventional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn category_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

impl Document for Project {
    fn collection_name() -> &'static str {
        "project"
    }
}

impl Record for Project {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;

        let project = Project {
            title: fields.required_string("title"),
            category: fields.required_string("category"),
            description: fields.optional_string("description"),
            images: fields.string_list("images"),
            featured: fields.bool_or("featured", false),
        };

        fields.finish(project)
    }
}
