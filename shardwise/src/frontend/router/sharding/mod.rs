//! Sharding rules consulted while parsing.

pub mod encryption;
pub mod rules;
pub mod tables;

pub use encryption::EncryptorEngine;
pub use rules::ShardingRules;
pub use tables::Tables;

/// Questions the parser asks about sharding configuration.
///
/// Shared between statements parsed concurrently, so read-only.
pub trait ShardingRule: Send + Sync {
    /// The column determines which shard a row lives on.
    fn is_sharding_column(&self, column: &str, table: &str) -> bool;

    /// Column populated by the key generator for this table.
    fn find_generate_key_column_name(&self, table: &str) -> Option<&str>;

    /// Number of assisted-query columns encryption adds to this table.
    fn assisted_query_column_count(&self, table: &str) -> Option<usize>;
}
