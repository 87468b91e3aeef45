// Submodules
pub mod core;
pub mod encryption;
pub mod error;
pub mod sharding;
pub mod tables;

pub use core::Config;
pub use encryption::{EncryptedColumn, EncryptedTable};
pub use error::Error;
pub use sharding::ShardedTable;
pub use tables::TableDefinition;
