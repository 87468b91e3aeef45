//! Sharding rules built from configuration.

use crate::config::{Config, ShardedTable};

use super::{EncryptorEngine, ShardingRule, Tables};

/// Configured sharding rules.
#[derive(Debug, Clone, Default)]
pub struct ShardingRules {
    tables: Vec<ShardedTable>,
    encryptor: EncryptorEngine,
}

impl ShardingRules {
    pub fn new(tables: Vec<ShardedTable>, encryptor: EncryptorEngine) -> Self {
        Self { tables, encryptor }
    }

    pub fn tables(&self) -> Tables<'_> {
        Tables::new(&self.tables)
    }
}

impl From<&Config> for ShardingRules {
    fn from(config: &Config) -> Self {
        Self::new(
            config.sharded_tables.clone(),
            EncryptorEngine::new(&config.encrypted_tables),
        )
    }
}

impl ShardingRule for ShardingRules {
    fn is_sharding_column(&self, column: &str, table: &str) -> bool {
        self.tables().key(table, column).is_some()
    }

    fn find_generate_key_column_name(&self, table: &str) -> Option<&str> {
        self.tables().generate_key_column(table)
    }

    fn assisted_query_column_count(&self, table: &str) -> Option<usize> {
        self.encryptor.assisted_query_column_count(table)
    }
}
