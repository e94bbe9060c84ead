use serde::{Deserialize, Serialize};

use crate::expression::Predicate;
use crate::sort::Sort;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub predicate: Predicate,
    #[serde(default)]
    pub sort: Vec<Sort>,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}
