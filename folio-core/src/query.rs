//! Query construction for document stores.
//!
//! Handlers describe what they want as a flat field -> value map; this module turns that
//! map into an expression tree that each backend evaluates through [`QueryVisitor`].
//!
//! ```ignore
//! use folio_core::query::{Filter, Query};
//! use bson::doc;
//!
//! let query = Query::builder()
//!     .filter(Filter::eq("category", "Home").and(Filter::eq("featured", true)))
//!     .limit(10)
//!     .build();
//! ```

use bson::{Bson, Document as BsonDocument};

use crate::error::StoreError;

/// A filter expression for querying documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Field equality: the document field must equal the value.
    Eq {
        /// The field name to compare.
        field: String,
        /// The value to compare against.
        value: Bson,
    },
}

impl Expr {
    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Returns the value this expression requires for `field`, if any.
    pub fn required_value(&self, field: &str) -> Option<&Bson> {
        match self {
            Expr::Eq { field: name, value } if name == field => Some(value),
            Expr::Eq { .. } => None,
            Expr::And(exprs) => exprs.iter().find_map(|expr| expr.required_value(field)),
        }
    }
}

/// A structured query: an optional filter and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Optional filter expression to match documents.
    pub filter: Option<Expr>,
    /// Maximum number of documents to return.
    pub limit: Option<usize>,
}

impl Query {
    /// Creates a new empty query with no filter or limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }
}

/// Helper for constructing filter expressions.
pub struct Filter;

impl Filter {
    /// Creates an equality filter expression.
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Expr {
        Expr::Eq { field: field.into(), value: value.into() }
    }

    /// Creates a logical AND filter expression.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Builds an expression requiring every entry of `filter` to match by equality.
    ///
    /// Returns `None` for an empty map, which matches every document.
    pub fn matching(filter: BsonDocument) -> Option<Expr> {
        let mut exprs = filter
            .into_iter()
            .map(|(field, value)| Filter::eq(field, value))
            .collect::<Vec<_>>();

        match exprs.len() {
            0 => None,
            1 => exprs.pop(),
            _ => Some(Expr::And(exprs)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter expression for this query.
    pub fn filter(mut self, filter: Expr) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Sets the filter expression when one is given, leaving the query unfiltered otherwise.
    pub fn maybe_filter(mut self, filter: Option<Expr>) -> Self {
        self.query.filter = filter;
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

pub trait QueryVisitor {
    type Output;
    type Error: Into<StoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_eq(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Eq { field, value } => self.visit_eq(field, value),
        }
    }
}
