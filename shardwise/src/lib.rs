//! Resolves the `SET` clause of `INSERT ... SET` statements for a
//! sharding-aware SQL front-end: column bindings for rewriting,
//! routing conditions, generated key hints and rewrite tokens.

pub mod backend;
pub mod config;
pub mod frontend;
pub mod logger;

pub use backend::{Schema, TableCatalog};
pub use frontend::router::parser::{Error, InsertStatement, SetAssignmentsSegment};
pub use frontend::router::{SegmentFiller, SetAssignmentsFiller, ShardingRule, ShardingRules};
