use serde::{Deserialize, Serialize};

/// Statically declared table, used when the
/// catalog isn't loaded from the database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Columns, in declaration order.
    #[serde(default)]
    pub columns: Vec<String>,
}
