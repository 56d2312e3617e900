//! Query translation to MongoDB query syntax.

use bson::{Bson, Document, doc};

use folio_core::{
    error::StoreError,
    query::{Expr, QueryVisitor},
};

/// Translates query expressions into MongoDB filter documents.
pub(crate) struct MongoQueryTranslator;

impl MongoQueryTranslator {
    /// Returns the filter document for an optional expression; `{}` matches everything.
    pub(crate) fn translate(expr: Option<&Expr>) -> Result<Document, StoreError> {
        match expr {
            Some(expr) => MongoQueryTranslator.visit_expr(expr),
            None => Ok(doc! {}),
        }
    }
}

impl QueryVisitor for MongoQueryTranslator {
    type Output = Document;
    type Error = StoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        // MongoDB rejects `$and` with an empty array
        if exprs.is_empty() {
            return Ok(doc! {});
        }

        Ok(doc! {
            "$and": exprs
                .iter()
                .map(|expr| self.visit_expr(expr))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn visit_eq(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error> {
        Ok(doc! {
            field: { "$eq": value },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::query::Filter;

    #[test]
    fn no_filter_is_empty_document() {
        assert_eq!(MongoQueryTranslator::translate(None).unwrap(), doc! {});
    }

    #[test]
    fn equality_uses_eq_operator() {
        let filter = Filter::eq("featured", false);

        assert_eq!(
            MongoQueryTranslator::translate(Some(&filter)).unwrap(),
            doc! { "featured": { "$eq": false } },
        );
    }

    #[test]
    fn conjunction_becomes_and() {
        let filter = Filter::eq("category", "Home").and(Filter::eq("featured", true));

        assert_eq!(
            MongoQueryTranslator::translate(Some(&filter)).unwrap(),
            doc! {
                "$and": [
                    { "category": { "$eq": "Home" } },
                    { "featured": { "$eq": true } },
                ]
            },
        );
    }

    #[test]
    fn empty_conjunction_matches_everything() {
        assert_eq!(
            MongoQueryTranslator::translate(Some(&Filter::and([]))).unwrap(),
            doc! {},
        );
    }
}
