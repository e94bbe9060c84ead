use bson::Document;
use serde::Serialize;
use sieve_query::Query;
use tracing::debug;

use crate::error::TranslateError;
use crate::field::FieldMapper;
use crate::predicate::translate_predicate_with;
use crate::sort::{sort_document_with, translate_sort_with};

/// Everything a MongoDB `find` needs from a [`Query`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindRequest {
    pub filter: Document,
    pub sort: Vec<String>,
    /// The same ordering as `sort`, as a `{ field: 1 | -1 }` document.
    pub sort_document: Document,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

pub fn translate_query(query: &Query) -> Result<FindRequest, TranslateError> {
    translate_query_with(&FieldMapper::default(), query)
}

pub fn translate_query_with(
    fields: &FieldMapper,
    query: &Query,
) -> Result<FindRequest, TranslateError> {
    let filter = match translate_predicate_with(fields, &query.predicate) {
        Ok(filter) => filter.into_document(),
        Err(e) => {
            debug!(error = %e, "query predicate rejected");
            return Err(e);
        }
    };
    let sort = translate_sort_with(fields, &query.sort);
    let sort_document = sort_document_with(fields, &query.sort);

    debug!(%filter, ?sort, skip = ?query.skip, take = ?query.take, "query translated");

    Ok(FindRequest {
        filter,
        sort,
        sort_document,
        skip: query.skip,
        take: query.take,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use sieve_query::{Expression, Predicate, Sort};

    #[test]
    fn default_query_matches_everything_by_id() {
        let request = translate_query(&Query::default()).unwrap();
        assert_eq!(request.filter, doc! {});
        assert_eq!(request.sort, vec!["_id".to_string()]);
        assert_eq!(request.sort_document, doc! { "_id": 1 });
        assert_eq!(request.skip, None);
        assert_eq!(request.take, None);
    }

    #[test]
    fn window_passes_through() {
        let query = Query {
            predicate: Predicate::new(vec![Expression::equal("id", "acct-1")]),
            sort: vec![Sort::desc("revenue")],
            skip: Some(20),
            take: Some(10),
        };
        let request = translate_query(&query).unwrap();
        assert_eq!(request.filter, doc! { "_id": "acct-1" });
        assert_eq!(request.sort, vec!["-revenue".to_string()]);
        assert_eq!(request.sort_document, doc! { "revenue": -1 });
        assert_eq!(request.skip, Some(20));
        assert_eq!(request.take, Some(10));
    }

    #[test]
    fn unsupported_predicate_fails_the_request() {
        let query = Query {
            predicate: Predicate::new(vec![Expression::Exist {
                field: "email".into(),
            }]),
            ..Query::default()
        };
        let err = translate_query(&query).unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::NOT_IMPLEMENTED);
    }
}
