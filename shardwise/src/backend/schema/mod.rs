//! Table catalog.
pub mod relation;

use fnv::FnvHashMap as HashMap;

pub use relation::Relation;

use crate::config::Config;

/// Table metadata the parser needs.
///
/// Shared between statements parsed concurrently, so read-only.
pub trait TableCatalog: Send + Sync {
    fn contains_table(&self, name: &str) -> bool;

    /// Number of declared columns, 0 if the table is unknown.
    fn column_count(&self, name: &str) -> usize;
}

/// In-memory table catalog.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    tables: HashMap<String, Relation>,
}

impl Schema {
    pub fn new(relations: impl IntoIterator<Item = Relation>) -> Self {
        Self {
            tables: relations
                .into_iter()
                .map(|relation| (relation.name.clone(), relation))
                .collect(),
        }
    }

    /// Get table by name.
    pub fn table(&self, name: &str) -> Option<&Relation> {
        self.tables.get(name)
    }
}

impl From<&Config> for Schema {
    fn from(config: &Config) -> Self {
        Self::new(config.tables.iter().map(Relation::from))
    }
}

impl TableCatalog for Schema {
    fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    fn column_count(&self, name: &str) -> usize {
        self.table(name)
            .map(|relation| relation.columns.len())
            .unwrap_or_default()
    }
}
