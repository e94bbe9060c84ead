use bson::Bson;
use sieve_query::{Expression, Predicate, Value};

use crate::error::TranslateError;
use crate::field::FieldMapper;
use crate::filter::{FilterDocument, FilterOperator, FilterValue};
use crate::value::to_bson;

/// Translate a predicate into a MongoDB filter document.
///
/// Follows MongoDB query conventions:
/// - Expressions at one level are an implicit AND and share one document
/// - `Equal` is a bare `{ field: value }`
/// - Other field conditions are operator sub-documents (`{ field: { "$gt": v } }`)
/// - `And` / `Or` become `$and` / `$or` arrays, one sub-filter per child
///
/// A second `And` (or `Or`) at the same level replaces the first, as does a
/// second condition on the same field. Any expression without a MongoDB
/// encoding fails the whole translation.
pub fn translate_predicate(predicate: &Predicate) -> Result<FilterDocument, TranslateError> {
    translate_predicate_with(&FieldMapper::default(), predicate)
}

pub fn translate_predicate_with(
    fields: &FieldMapper,
    predicate: &Predicate,
) -> Result<FilterDocument, TranslateError> {
    translate_expressions(fields, predicate.as_slice())
}

fn translate_expressions(
    fields: &FieldMapper,
    expressions: &[Expression],
) -> Result<FilterDocument, TranslateError> {
    let mut filter = FilterDocument::new();

    for expression in expressions {
        match expression {
            Expression::And(children) => {
                filter.insert("$and", translate_clauses(fields, children)?);
            }
            Expression::Or(children) => {
                filter.insert("$or", translate_clauses(fields, children)?);
            }
            Expression::Equal { field, value } => {
                filter.insert(fields.map(field), FilterValue::Literal(to_bson(value)));
            }
            Expression::NotEqual { field, value } => {
                filter.insert(fields.map(field), operator(FilterOperator::Ne, value));
            }
            Expression::GreaterThan { field, value } => {
                filter.insert(fields.map(field), operator(FilterOperator::Gt, value));
            }
            Expression::GreaterOrEqual { field, value } => {
                filter.insert(fields.map(field), operator(FilterOperator::Gte, value));
            }
            Expression::LowerThan { field, value } => {
                filter.insert(fields.map(field), operator(FilterOperator::Lt, value));
            }
            Expression::LowerOrEqual { field, value } => {
                filter.insert(fields.map(field), operator(FilterOperator::Lte, value));
            }
            Expression::In { field, values } => {
                filter.insert(fields.map(field), membership(FilterOperator::In, values));
            }
            Expression::NotIn { field, values } => {
                filter.insert(fields.map(field), membership(FilterOperator::Nin, values));
            }
            Expression::Regex { field, pattern } => {
                filter.insert(
                    fields.map(field),
                    FilterValue::Operator(
                        FilterOperator::Regex,
                        Bson::String(pattern.as_str().to_string()),
                    ),
                );
            }
            Expression::Exist { .. }
            | Expression::NotExist { .. }
            | Expression::ElemMatch { .. } => {
                return Err(TranslateError::UnsupportedExpression(expression.kind()));
            }
        }
    }

    Ok(filter)
}

/// Translate each child of an `And` / `Or` as its own single-expression predicate.
fn translate_clauses(
    fields: &FieldMapper,
    children: &[Expression],
) -> Result<FilterValue, TranslateError> {
    let clauses = children
        .iter()
        .map(|child| translate_expressions(fields, std::slice::from_ref(child)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FilterValue::Clauses(clauses))
}

fn operator(op: FilterOperator, value: &Value) -> FilterValue {
    FilterValue::Operator(op, to_bson(value))
}

fn membership(op: FilterOperator, values: &[Value]) -> FilterValue {
    FilterValue::Operator(op, Bson::Array(values.iter().map(to_bson).collect()))
}
