//! Fold grammar segments into the statement model.

pub mod column_count;
pub mod generated_key;
pub mod set_assignments;

pub use set_assignments::SetAssignmentsFiller;

use super::{Error, InsertStatement};
use crate::backend::TableCatalog;
use crate::frontend::router::sharding::ShardingRule;

/// Fills one clause of a statement from its segment.
pub trait SegmentFiller<S> {
    /// Append what the segment contributes to the statement.
    /// The statement is left untouched on error.
    fn fill(
        &self,
        segment: &S,
        statement: &mut InsertStatement,
        sql: &str,
        rule: &dyn ShardingRule,
        catalog: &dyn TableCatalog,
    ) -> Result<(), Error>;
}
