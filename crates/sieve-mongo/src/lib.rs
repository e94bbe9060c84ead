mod error;
mod field;
mod filter;
mod predicate;
mod request;
mod sort;
mod value;

pub use error::TranslateError;
pub use field::{FieldMapper, ID_FIELD, PRIMARY_KEY, map_field};
pub use filter::{FilterDocument, FilterOperator, FilterValue};
pub use predicate::{translate_predicate, translate_predicate_with};
pub use request::{FindRequest, translate_query, translate_query_with};
pub use sort::{
    DESCENDING_MARKER, sort_document, sort_document_with, translate_sort, translate_sort_with,
};
pub use value::to_bson;
