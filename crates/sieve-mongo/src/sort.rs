use bson::Document;
use sieve_query::Sort;

use crate::field::FieldMapper;

/// Prefix marking a descending sort key.
pub const DESCENDING_MARKER: char = '-';

/// Translate sort specs into MongoDB sort keys (`"field"` / `"-field"`).
///
/// An empty sort list sorts by primary key ascending.
pub fn translate_sort(sort: &[Sort]) -> Vec<String> {
    translate_sort_with(&FieldMapper::default(), sort)
}

pub fn translate_sort_with(fields: &FieldMapper, sort: &[Sort]) -> Vec<String> {
    if sort.is_empty() {
        return vec![fields.primary_key().to_string()];
    }

    sort.iter()
        .map(|s| {
            let field = fields.map(&s.field);
            if s.is_reversed() {
                format!("{DESCENDING_MARKER}{field}")
            } else {
                field.to_string()
            }
        })
        .collect()
}

/// Build a `{ field: 1 | -1 }` sort document.
///
/// Directions come from the sort specs, never from the key text, so a field
/// whose name starts with `-` keeps its own direction.
pub fn sort_document(sort: &[Sort]) -> Document {
    sort_document_with(&FieldMapper::default(), sort)
}

pub fn sort_document_with(fields: &FieldMapper, sort: &[Sort]) -> Document {
    let mut doc = Document::new();
    if sort.is_empty() {
        doc.insert(fields.primary_key(), 1_i32);
        return doc;
    }

    for s in sort {
        let direction = if s.is_reversed() { -1_i32 } else { 1_i32 };
        doc.insert(fields.map(&s.field), direction);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn empty_sort_defaults_to_primary_key() {
        assert_eq!(translate_sort(&[]), vec!["_id".to_string()]);
    }

    #[test]
    fn marker_and_order() {
        let keys = translate_sort(&[Sort::desc("name"), Sort::asc("id")]);
        assert_eq!(keys, vec!["-name".to_string(), "_id".to_string()]);
    }

    #[test]
    fn reversed_id_is_mapped_before_marking() {
        assert_eq!(translate_sort(&[Sort::desc("id")]), vec!["-_id".to_string()]);
    }

    #[test]
    fn custom_primary_key_default() {
        let fields = FieldMapper {
            id_field: "key".into(),
            primary_key: "_key".into(),
        };
        assert_eq!(translate_sort_with(&fields, &[]), vec!["_key".to_string()]);
    }

    #[test]
    fn sort_document_directions() {
        let sort = [Sort::desc("created"), Sort::asc("id")];
        assert_eq!(sort_document(&sort), doc! { "created": -1, "_id": 1 });
    }

    #[test]
    fn sort_document_defaults_to_primary_key() {
        assert_eq!(sort_document(&[]), doc! { "_id": 1 });
    }

    #[test]
    fn dashed_field_name_keeps_its_direction() {
        let asc = [Sort::asc("-weird")];
        assert_eq!(translate_sort(&asc), vec!["-weird".to_string()]);
        assert_eq!(sort_document(&asc), doc! { "-weird": 1 });

        let desc = [Sort::desc("-weird")];
        assert_eq!(translate_sort(&desc), vec!["--weird".to_string()]);
        assert_eq!(sort_document(&desc), doc! { "-weird": -1 });
    }
}
