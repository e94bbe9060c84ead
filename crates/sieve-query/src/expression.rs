use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// A compiled regular expression that compares and serializes by its source.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern(re)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// A recursive filter expression tree.
///
/// Field names are logical names; mapping them onto storage names is the
/// backend's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    // Logical
    And(Vec<Expression>),
    Or(Vec<Expression>),
    // Comparison
    Equal { field: String, value: Value },
    NotEqual { field: String, value: Value },
    GreaterThan { field: String, value: Value },
    GreaterOrEqual { field: String, value: Value },
    LowerThan { field: String, value: Value },
    LowerOrEqual { field: String, value: Value },
    // Membership
    In { field: String, values: Vec<Value> },
    NotIn { field: String, values: Vec<Value> },
    // Pattern
    Regex { field: String, pattern: Pattern },
    // Existence
    Exist { field: String },
    NotExist { field: String },
    // Array element
    ElemMatch { field: String, predicate: Predicate },
}

impl Expression {
    pub fn and(children: impl IntoIterator<Item = Expression>) -> Self {
        Expression::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Or(children.into_iter().collect())
    }

    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::Equal {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn not_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::NotEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn greater_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::GreaterThan {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn greater_or_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::GreaterOrEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn lower_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::LowerThan {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn lower_or_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::LowerOrEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Expression::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Expression::NotIn {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn regex(field: impl Into<String>, pattern: Pattern) -> Self {
        Expression::Regex {
            field: field.into(),
            pattern,
        }
    }

    /// Stable tag naming the variant, matching its serialized name.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::And(_) => "and",
            Expression::Or(_) => "or",
            Expression::Equal { .. } => "equal",
            Expression::NotEqual { .. } => "not_equal",
            Expression::GreaterThan { .. } => "greater_than",
            Expression::GreaterOrEqual { .. } => "greater_or_equal",
            Expression::LowerThan { .. } => "lower_than",
            Expression::LowerOrEqual { .. } => "lower_or_equal",
            Expression::In { .. } => "in",
            Expression::NotIn { .. } => "not_in",
            Expression::Regex { .. } => "regex",
            Expression::Exist { .. } => "exist",
            Expression::NotExist { .. } => "not_exist",
            Expression::ElemMatch { .. } => "elem_match",
        }
    }
}

/// Top-level filter: an implicit AND of its expressions, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate(Vec<Expression>);

impl Predicate {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Predicate(expressions)
    }

    pub fn as_slice(&self) -> &[Expression] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Expression>> for Predicate {
    fn from(expressions: Vec<Expression>) -> Self {
        Predicate(expressions)
    }
}

impl FromIterator<Expression> for Predicate {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Predicate(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Predicate {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
