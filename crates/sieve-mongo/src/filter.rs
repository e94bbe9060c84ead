use bson::{Bson, Document};

/// Field operators the translator emits inside an operator sub-document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
    Regex,
}

impl FilterOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Ne => "$ne",
            FilterOperator::Gt => "$gt",
            FilterOperator::Gte => "$gte",
            FilterOperator::Lt => "$lt",
            FilterOperator::Lte => "$lte",
            FilterOperator::In => "$in",
            FilterOperator::Nin => "$nin",
            FilterOperator::Regex => "$regex",
        }
    }
}

/// Value stored under a key of a [`FilterDocument`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Bare value: implicit equality.
    Literal(Bson),
    /// `{ "$op": operand }`. `$in`/`$nin` operands are arrays.
    Operator(FilterOperator, Bson),
    /// Sub-filters of `$and` / `$or`, in input order.
    Clauses(Vec<FilterDocument>),
}

impl From<FilterValue> for Bson {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Literal(v) => v,
            FilterValue::Operator(op, operand) => {
                let mut doc = Document::new();
                doc.insert(op.as_str(), operand);
                Bson::Document(doc)
            }
            FilterValue::Clauses(clauses) => Bson::Array(
                clauses
                    .into_iter()
                    .map(|c| Bson::Document(c.into_document()))
                    .collect(),
            ),
        }
    }
}

/// A translated filter, keyed by storage field name or `$and` / `$or`.
///
/// Keys keep insertion order. Inserting a key that is already present
/// replaces its value in place, the same way `bson::Document` behaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDocument {
    entries: Vec<(String, FilterValue)>,
}

impl FilterDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) -> Option<FilterValue> {
        let key = key.into();
        if let Some(i) = self.entries.iter().position(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_document(self) -> Document {
        let mut doc = Document::new();
        for (key, value) in self.entries {
            doc.insert(key, Bson::from(value));
        }
        doc
    }
}

impl From<FilterDocument> for Document {
    fn from(filter: FilterDocument) -> Self {
        filter.into_document()
    }
}
