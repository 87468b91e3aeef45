//! Number of values an `INSERT` row must supply.

use crate::backend::TableCatalog;
use crate::frontend::router::sharding::ShardingRule;

/// Expected number of values, given the number of bound columns.
///
/// Assisted-query columns are added by encryption and never written
/// by the client, unless the catalog already accounts for every bound column.
pub fn column_count_excluding_assisted_query(
    table: &str,
    bound: usize,
    rule: &dyn ShardingRule,
    catalog: &dyn TableCatalog,
) -> usize {
    if catalog.contains_table(table) && catalog.column_count(table) == bound {
        return bound;
    }

    match rule.assisted_query_column_count(table) {
        Some(assisted) if assisted > 0 => bound.saturating_sub(assisted),
        _ => bound,
    }
}
