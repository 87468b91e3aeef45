use serde::{Deserialize, Serialize};

/// Sharded table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ShardedTable {
    /// Table name. If none specified, all tables with the specified
    /// column are considered sharded.
    #[serde(default)]
    pub name: Option<String>,
    /// Table sharded on this column.
    #[serde(default)]
    pub column: String,
    /// Column populated by the key generator when
    /// the client doesn't supply a value.
    #[serde(default)]
    pub generate_key_column: Option<String>,
}

impl ShardedTable {
    /// This entry applies to the given table.
    pub fn matches_table(&self, table: &str) -> bool {
        match self.name {
            Some(ref name) => name == table,
            None => true,
        }
    }

    /// The column shards this table. Column names are case-insensitive.
    pub fn matches_column(&self, column: &str) -> bool {
        self.column.eq_ignore_ascii_case(column)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sharded_table_match() {
        let table = ShardedTable {
            name: Some("user".into()),
            column: "name".into(),
            ..Default::default()
        };

        assert!(table.matches_table("user"));
        assert!(!table.matches_table("orders"));
        assert!(table.matches_column("NAME"));

        let any = ShardedTable {
            column: "tenant_id".into(),
            ..Default::default()
        };
        assert!(any.matches_table("orders"));
    }
}
