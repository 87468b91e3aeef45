//! Encrypted column bookkeeping.

use fnv::FnvHashMap as HashMap;

use crate::config::EncryptedTable;

/// Tracks the shadow columns encryption adds to tables.
#[derive(Debug, Clone, Default)]
pub struct EncryptorEngine {
    assisted_query_columns: HashMap<String, usize>,
}

impl EncryptorEngine {
    pub fn new<'a>(tables: impl IntoIterator<Item = &'a EncryptedTable>) -> Self {
        let mut assisted_query_columns = HashMap::default();

        for table in tables {
            *assisted_query_columns
                .entry(table.name.clone())
                .or_insert(0) += table.assisted_query_columns();
        }

        Self {
            assisted_query_columns,
        }
    }

    /// Number of assisted-query columns for the table,
    /// `None` if it has none.
    pub fn assisted_query_column_count(&self, table: &str) -> Option<usize> {
        match self.assisted_query_columns.get(table) {
            Some(0) | None => None,
            Some(count) => Some(*count),
        }
    }
}
