use serde::{Deserialize, Serialize};

use crate::config::TableDefinition;

/// Table known to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Table name.
    pub name: String,
    /// Column names, in declaration order.
    pub columns: Vec<String>,
}

impl Relation {
    pub fn new(name: impl ToString, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
        }
    }
}

impl From<&TableDefinition> for Relation {
    fn from(value: &TableDefinition) -> Self {
        Self {
            name: value.name.clone(),
            columns: value.columns.clone(),
        }
    }
}
