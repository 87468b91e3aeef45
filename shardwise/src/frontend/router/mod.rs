//! Statement parsing and sharding decisions.

pub mod parser;
pub mod sharding;

pub use parser::{InsertStatement, SegmentFiller, SetAssignmentsFiller, SetAssignmentsSegment};
pub use sharding::{ShardingRule, ShardingRules};
