//! Encrypted columns.
use serde::{Deserialize, Serialize};

/// Table with one or more encrypted columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EncryptedTable {
    /// Logical table name.
    pub name: String,
    /// Encrypted columns.
    #[serde(default)]
    pub columns: Vec<EncryptedColumn>,
}

impl EncryptedTable {
    /// Number of assisted-query columns the encryption
    /// layer adds to this table.
    pub fn assisted_query_columns(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| column.assisted_query_column.is_some())
            .count()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EncryptedColumn {
    /// Logical column name.
    pub name: String,
    /// Physical column holding the ciphertext.
    pub cipher_column: String,
    /// Physical column used for equality lookups, if any.
    #[serde(default)]
    pub assisted_query_column: Option<String>,
}
