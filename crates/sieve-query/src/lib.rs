mod expression;
mod query;
mod sort;
mod value;

pub use expression::{Expression, Pattern, Predicate};
pub use query::Query;
pub use sort::{Sort, SortDirection};
pub use value::Value;
