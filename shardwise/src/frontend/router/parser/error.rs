//! Parser error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("INSERT INTO column size mismatch value size: expected {columns} values, got {values}")]
    ColumnValueCountMismatch { columns: usize, values: usize },

    #[error("INSERT INTO can not support complex expression value on sharding column \"{0}\"")]
    UnsupportedShardingColumnExpression(String),

    #[error("expression at {start}..={stop} is outside of the statement")]
    ExpressionSpan { start: usize, stop: usize },

    #[error("INSERT must reference exactly one table")]
    NoSingleTable,
}
