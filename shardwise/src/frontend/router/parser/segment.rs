//! Segments produced by the grammar for `INSERT ... SET`.

use super::{ExpressionKind, ExpressionSegment};

/// Column on the left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSegment {
    name: String,
    owner: Option<String>,
    start: usize,
}

impl ColumnSegment {
    /// Unqualified column.
    pub fn new(name: impl ToString, start: usize) -> Self {
        Self {
            name: name.to_string(),
            owner: None,
            start,
        }
    }

    /// Column qualified with a table name, e.g. `user.name`.
    /// `start` is the offset of the qualifier.
    pub fn qualified(owner: impl ToString, name: impl ToString, start: usize) -> Self {
        Self {
            name: name.to_string(),
            owner: Some(owner.to_string()),
            start,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table qualifier, unquoted.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

/// `SET col1 = expr1, col2 = expr2, ...`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetAssignmentsSegment {
    columns: Vec<ColumnSegment>,
    values: Vec<ExpressionSegment>,
    parameters_count: usize,
    set_clause_start: usize,
}

impl SetAssignmentsSegment {
    /// Start a segment whose `SET` keyword is at the given offset.
    pub fn new(set_clause_start: usize) -> Self {
        Self {
            set_clause_start,
            ..Default::default()
        }
    }

    /// Add a `column = value` pair.
    pub fn assignment(self, column: ColumnSegment, value: ExpressionSegment) -> Self {
        self.column(column).value(value)
    }

    /// Add a column without a value.
    pub fn column(mut self, column: ColumnSegment) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a value. Placeholders are counted.
    pub fn value(mut self, value: ExpressionSegment) -> Self {
        if let ExpressionKind::Placeholder(_) = value.kind() {
            self.parameters_count += 1;
        }
        self.values.push(value);
        self
    }

    /// Override the placeholder count reported by the grammar.
    pub fn with_parameters_count(mut self, count: usize) -> Self {
        self.parameters_count = count;
        self
    }

    pub fn columns(&self) -> &[ColumnSegment] {
        &self.columns
    }

    pub fn values(&self) -> &[ExpressionSegment] {
        &self.values
    }

    pub fn parameters_count(&self) -> usize {
        self.parameters_count
    }

    pub fn set_clause_start(&self) -> usize {
        self.set_clause_start
    }
}
