//! Configuration.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::info;

pub use shardwise_config::{
    Config, EncryptedColumn, EncryptedTable, Error, ShardedTable, TableDefinition,
};

static CONFIG: Lazy<ArcSwap<Config>> = Lazy::new(|| ArcSwap::from_pointee(Config::default()));

static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Load configuration.
pub fn config() -> Arc<Config> {
    CONFIG.load().clone()
}

/// Load the configuration file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<Config>, Error> {
    let config = Config::load(path)?;
    set(config)
}

/// Replace the current configuration.
pub fn set(config: Config) -> Result<Arc<Config>, Error> {
    let _lock = LOCK.lock();
    config.check()?;

    info!(
        "{} sharded tables, {} encrypted tables, {} tables in catalog",
        config.sharded_tables.len(),
        config.encrypted_tables.len(),
        config.tables.len(),
    );

    let config = Arc::new(config);
    CONFIG.store(config.clone());
    Ok(config)
}
