use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;
use tracing::{info, warn};

use super::encryption::EncryptedTable;
use super::error::Error;
use super::sharding::ShardedTable;
use super::tables::TableDefinition;

/// Configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sharded tables.
    #[serde(default)]
    pub sharded_tables: Vec<ShardedTable>,

    /// Tables with encrypted columns.
    #[serde(default)]
    pub encrypted_tables: Vec<EncryptedTable>,

    /// Static table catalog.
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

impl Config {
    /// Load configuration from disk or use defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let config = if let Ok(source) = read_to_string(path) {
            let config: Config = match toml::from_str(&source) {
                Ok(config) => config,
                Err(err) => return Err(Error::config(&source, err)),
            };
            info!("loaded \"{}\"", path.display());
            config
        } else {
            warn!(
                "\"{}\" doesn't exist, loading defaults instead",
                path.display()
            );
            Config::default()
        };

        config.check()?;

        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn from_toml(source: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(source).map_err(|err| Error::config(source, err))?;
        config.check()?;
        Ok(config)
    }

    /// Validate the configuration. Hard errors are returned,
    /// everything else is logged.
    pub fn check(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();

        for (index, table) in self.sharded_tables.iter().enumerate() {
            if table.column.is_empty() {
                return Err(Error::NoShardingColumn(index));
            }

            let key = (table.name.clone(), table.column.to_lowercase());
            if !seen.insert(key) {
                warn!(
                    "sharded table \"{}\" on column \"{}\" is configured more than once",
                    table.name.as_deref().unwrap_or("*"),
                    table.column
                );
            }
        }

        for (index, table) in self.encrypted_tables.iter().enumerate() {
            if table.name.is_empty() {
                return Err(Error::NoEncryptedTableName(index));
            }
        }

        for table in &self.tables {
            if table.columns.is_empty() {
                warn!("table \"{}\" is declared without columns", table.name);
            }
        }

        Ok(())
    }
}
