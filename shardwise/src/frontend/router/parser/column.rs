//! Column bound to a statement.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Column resolved against the statement's table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Table owning the column.
    pub table: String,
}

impl Column {
    pub fn new(name: impl ToString, table: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.table, self.name)
    }
}
