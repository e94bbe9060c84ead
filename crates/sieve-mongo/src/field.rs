use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Logical identifier field exposed by the resource layer.
pub const ID_FIELD: &str = "id";

/// MongoDB's reserved primary-key field.
pub const PRIMARY_KEY: &str = "_id";

/// Map a logical field name to its storage name using the default mapping.
pub fn map_field(name: &str) -> &str {
    if name == ID_FIELD { PRIMARY_KEY } else { name }
}

/// Maps logical field names onto storage field names.
///
/// Only the identifier field is renamed; every other name passes through
/// untouched (no dotted-path rewriting, no case folding).
///
/// `id` → `_id` holds for `FieldMapper::default()` and [`map_field`]. A mapper
/// with a different `id_field` renames only that field, so `"id"` passes
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapper {
    pub id_field: Cow<'static, str>,
    pub primary_key: Cow<'static, str>,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self {
            id_field: Cow::Borrowed(ID_FIELD),
            primary_key: Cow::Borrowed(PRIMARY_KEY),
        }
    }
}

impl FieldMapper {
    pub fn map<'a>(&'a self, name: &'a str) -> &'a str {
        if name == self.id_field {
            &*self.primary_key
        } else {
            name
        }
    }

    pub fn primary_key(&self) -> &str {
        &*self.primary_key
    }
}
