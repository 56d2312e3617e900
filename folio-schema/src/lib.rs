//! Record shapes and boundary validation for the portfolio API.
//!
//! Every record type implements [`Record`]:
//!
//! - [`Record::parse`] validates raw JSON input, applies defaults, and reports every
//!   offending field at once
//! - [`Record::from_stored`] decodes a document read back from the store, applying
//!   read defaults for keys the document lacks
//!
//! The portfolio records are [`Project`], [`Testimonial`] and [`Inquiry`]. [`User`] and
//! [`Product`] are reference shapes kept alongside them.
//!
//! # Example
//!
//! ```ignore
//! use folio_schema::{Inquiry, Record};
//! use serde_json::json;
//!
//! let inquiry = Inquiry::parse(&json!({ "name": "Ana", "email": "ana@example.com" }))?;
//! assert_eq!(inquiry.source, "website");
//! ```

#[allow(unused_extern_crates)]
extern crate self as folio_schema;

pub mod error;
mod fields;
pub mod inquiry;
pub mod project;
pub mod record;
pub mod reference;
pub mod testimonial;

pub use error::{FieldError, ValidationError, Violation};
pub use inquiry::Inquiry;
pub use project::Project;
pub use record::Record;
pub use reference::{Product, User};
pub use testimonial::Testimonial;
