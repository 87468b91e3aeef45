use crate::config::ShardedTable;

/// Sharded table lookups.
pub struct Tables<'a> {
    tables: &'a [ShardedTable],
}

impl<'a> Tables<'a> {
    pub fn new(tables: &'a [ShardedTable]) -> Self {
        Tables { tables }
    }

    /// Sharded table entries that apply to this table.
    ///
    /// Entries naming the table take precedence over entries
    /// without a name.
    pub fn sharded(&self, table: &str) -> Vec<&'a ShardedTable> {
        // Check tables with name first.
        let named = self
            .tables
            .iter()
            .filter(|t| t.name.as_deref() == Some(table))
            .collect::<Vec<_>>();

        if !named.is_empty() {
            return named;
        }

        // Check tables without name.
        self.tables.iter().filter(|t| t.name.is_none()).collect()
    }

    /// Is the column a sharding key for this table.
    pub fn key(&self, table: &str, column: &str) -> Option<&'a ShardedTable> {
        self.sharded(table)
            .into_iter()
            .find(|t| t.matches_column(column))
    }

    /// Generate key column, only configurable per named table.
    pub fn generate_key_column(&self, table: &str) -> Option<&'a str> {
        self.tables
            .iter()
            .filter(|t| t.matches_table(table) && t.name.is_some())
            .find_map(|t| t.generate_key_column.as_deref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tables() -> Vec<ShardedTable> {
        vec![
            ShardedTable {
                name: Some("user".into()),
                column: "name".into(),
                generate_key_column: Some("id".into()),
            },
            ShardedTable {
                name: None,
                column: "tenant_id".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_named_before_unnamed() {
        let config = tables();
        let tables = Tables::new(&config);

        assert!(tables.key("user", "name").is_some());
        assert!(tables.key("user", "Name").is_some());
        // Named entry shadows column-only entries.
        assert!(tables.key("user", "tenant_id").is_none());
        assert!(tables.key("orders", "tenant_id").is_some());
        assert!(tables.key("orders", "name").is_none());
    }

    #[test]
    fn test_generate_key_column() {
        let config = tables();
        let tables = Tables::new(&config);

        assert_eq!(tables.generate_key_column("user"), Some("id"));
        assert_eq!(tables.generate_key_column("orders"), None);
    }
}
