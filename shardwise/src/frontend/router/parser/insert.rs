//! `INSERT` statement model, filled clause by clause.

use super::{
    AndCondition, Column, GeneratedKeyCondition, Keyword, OrCondition, SqlExpression, SqlToken,
};

/// Values of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertValue {
    keyword: Keyword,
    parameters_count: usize,
    values: Vec<SqlExpression>,
}

impl InsertValue {
    pub fn new(keyword: Keyword, parameters_count: usize) -> Self {
        Self {
            keyword,
            parameters_count,
            values: vec![],
        }
    }

    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    pub fn parameters_count(&self) -> usize {
        self.parameters_count
    }

    pub fn values(&self) -> &[SqlExpression] {
        &self.values
    }

    pub(crate) fn push(&mut self, value: SqlExpression) {
        self.values.push(value);
    }
}

/// Parsed `INSERT` statement.
///
/// Clause fillers only ever append to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertStatement {
    tables: Vec<String>,
    columns: Vec<Column>,
    insert_values: Vec<InsertValue>,
    route_conditions: OrCondition,
    generated_key_conditions: Vec<GeneratedKeyCondition>,
    tokens: Vec<SqlToken>,
    parameters_index: usize,
}

impl InsertStatement {
    /// Statement against a single table.
    pub fn new(table: impl ToString) -> Self {
        Self {
            tables: vec![table.to_string()],
            ..Default::default()
        }
    }

    pub fn add_table(&mut self, table: impl ToString) {
        self.tables.push(table.to_string());
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Table name, if the statement references exactly one table.
    pub fn single_table_name(&self) -> Option<&str> {
        match self.tables.as_slice() {
            [table] => Some(table.as_str()),
            _ => None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn insert_values(&self) -> &[InsertValue] {
        &self.insert_values
    }

    pub fn route_conditions(&self) -> &OrCondition {
        &self.route_conditions
    }

    pub fn generated_key_conditions(&self) -> &[GeneratedKeyCondition] {
        &self.generated_key_conditions
    }

    /// Rewrite tokens, in the order they were emitted.
    pub fn tokens(&self) -> &[SqlToken] {
        &self.tokens
    }

    /// Number of statement parameters consumed so far.
    pub fn parameters_index(&self) -> usize {
        self.parameters_index
    }

    pub(crate) fn add_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.columns.extend(columns);
    }

    pub(crate) fn add_insert_value(&mut self, value: InsertValue) {
        self.insert_values.push(value);
    }

    pub(crate) fn add_and_condition(&mut self, condition: AndCondition) {
        self.route_conditions.and_conditions.push(condition);
    }

    pub(crate) fn add_generated_key_conditions(
        &mut self,
        conditions: impl IntoIterator<Item = GeneratedKeyCondition>,
    ) {
        self.generated_key_conditions.extend(conditions);
    }

    pub(crate) fn add_tokens(&mut self, tokens: impl IntoIterator<Item = SqlToken>) {
        self.tokens.extend(tokens);
    }

    pub(crate) fn advance_parameters_index(&mut self, count: usize) {
        self.parameters_index += count;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_table_name() {
        let mut statement = InsertStatement::new("user");
        assert_eq!(statement.single_table_name(), Some("user"));

        statement.add_table("orders");
        assert_eq!(statement.single_table_name(), None);

        assert_eq!(InsertStatement::default().single_table_name(), None);
    }
}
