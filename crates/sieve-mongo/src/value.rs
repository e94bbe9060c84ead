use bson::Bson;
use sieve_query::Value;

/// Convert a query value into its BSON form.
///
/// Integers are always `Int64`; datetimes become `Bson::DateTime`.
pub fn to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Int(n) => Bson::Int64(*n),
        Value::Float(n) => Bson::Double(*n),
        Value::String(s) => Bson::String(s.clone()),
        Value::Date { millis } => Bson::DateTime(bson::DateTime::from_millis(*millis)),
        Value::List(values) => Bson::Array(values.iter().map(to_bson).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(to_bson(&Value::Null), Bson::Null);
        assert_eq!(to_bson(&Value::Bool(true)), Bson::Boolean(true));
        assert_eq!(to_bson(&Value::Int(18)), Bson::Int64(18));
        assert_eq!(to_bson(&Value::Float(2.5)), Bson::Double(2.5));
        assert_eq!(to_bson(&Value::from("x")), Bson::String("x".into()));
    }

    #[test]
    fn date_keeps_millis() {
        let converted = to_bson(&Value::date(1_700_000_000_000));
        assert_eq!(
            converted,
            Bson::DateTime(bson::DateTime::from_millis(1_700_000_000_000))
        );
    }

    #[test]
    fn list_preserves_order_and_duplicates() {
        let converted = to_bson(&Value::from(vec![3, 1, 3]));
        assert_eq!(
            converted,
            Bson::Array(vec![Bson::Int64(3), Bson::Int64(1), Bson::Int64(3)])
        );
    }
}
