//! Reference record shapes. No endpoint serves them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use folio_core::document::Document;

use crate::{
    error::ValidationError,
    fields::{FieldReader, email_address},
    record::Record,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<i64>,
    #[serde(default = "enabled")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    #[serde(default = "enabled")]
    pub in_stock: bool,
}

fn enabled() -> bool {
    true
}

impl Document for User {
    fn collection_name() -> &'static str {
        "user"
    }
}

impl Document for Product {
    fn collection_name() -> &'static str {
        "product"
    }
}

impl Record for User {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;

        let user = User {
            name: fields.required_string("name"),
            email: fields.required_string("email"),
            address: fields.optional_string("address"),
            age: fields.optional_integer("age"),
            is_active: fields.bool_or("is_active", true),
        };

        fields.finish(user)
    }
}

impl Record for Product {
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(raw)?;

        let product = Product {
            title: fields.required_string("title"),
            description: fields.optional_string("description"),
            price: fields.required_number("price"),
            category: fields.required_string("category"),
            in_stock: fields.bool_or("in_stock", true),
        };

        fields.finish(product)
    }
}
