//! Handle `INSERT ... SET col = value, ...`.
use tracing::{debug, trace};

use super::column_count::column_count_excluding_assisted_query;
use super::generated_key::generated_key_condition;
use super::SegmentFiller;
use crate::backend::TableCatalog;
use crate::frontend::router::parser::{
    AndCondition, Column, ColumnSegment, Condition, Error, ExpressionSegment,
    GeneratedKeyCondition, InsertStatement, InsertValue, InsertValuesToken, Keyword,
    QuoteCharacter, SetAssignmentsSegment, SqlToken, TableToken,
};
use crate::frontend::router::sharding::ShardingRule;

/// Fills an `INSERT` statement from its `SET` assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetAssignmentsFiller;

/// What a single row contributes to the statement.
#[derive(Debug)]
struct Row {
    insert_value: InsertValue,
    and_condition: AndCondition,
    generated_keys: Vec<GeneratedKeyCondition>,
}

impl SegmentFiller<SetAssignmentsSegment> for SetAssignmentsFiller {
    fn fill(
        &self,
        segment: &SetAssignmentsSegment,
        statement: &mut InsertStatement,
        sql: &str,
        rule: &dyn ShardingRule,
        catalog: &dyn TableCatalog,
    ) -> Result<(), Error> {
        let table = statement
            .single_table_name()
            .ok_or(Error::NoSingleTable)?
            .to_owned();

        let mut columns = Vec::with_capacity(segment.columns().len());
        let mut tokens = vec![];

        for column in segment.columns() {
            let (column, token) = self.column(column, &table, sql)?;
            columns.push(column);
            tokens.extend(token);
        }

        trace!("bound columns: {:?}", columns);

        let expected = column_count_excluding_assisted_query(&table, columns.len(), rule, catalog);

        // Every value needs a column, whatever the catalog says.
        if segment.values().len() != expected || segment.values().len() > columns.len() {
            debug!(
                "table \"{}\" expects {} values, SET has {}",
                table,
                expected,
                segment.values().len()
            );
            return Err(Error::ColumnValueCountMismatch {
                columns: expected.min(columns.len()),
                values: segment.values().len(),
            });
        }

        let row = self.row(segment, &columns, &table, sql, rule)?;

        statement.add_columns(columns);
        statement.add_insert_value(row.insert_value);
        statement.add_and_condition(row.and_condition);
        statement.add_generated_key_conditions(row.generated_keys);
        statement.advance_parameters_index(segment.parameters_count());
        tokens.push(
            InsertValuesToken {
                start: segment.set_clause_start(),
                keyword: Keyword::Set,
            }
            .into(),
        );
        statement.add_tokens(tokens);

        Ok(())
    }
}

impl SetAssignmentsFiller {
    /// Bind the column to the statement's table.
    ///
    /// A qualifier naming the table gets a token so the rewriter
    /// can substitute the physical table.
    fn column(
        &self,
        segment: &ColumnSegment,
        table: &str,
        sql: &str,
    ) -> Result<(Column, Option<SqlToken>), Error> {
        let column = Column::new(segment.name(), table);

        let token: Option<SqlToken> = match segment.owner() {
            Some(owner) if owner == table => {
                let start = segment.start();
                let source = sql
                    .get(start..)
                    .filter(|source| !source.is_empty())
                    .ok_or(Error::ExpressionSpan { start, stop: start })?;

                Some(
                    TableToken {
                        start,
                        table_name: table.to_owned(),
                        quote: QuoteCharacter::detect(source),
                    }
                    .into(),
                )
            }
            // Qualifiers naming another table are accepted as-is.
            _ => None,
        };

        Ok((column, token))
    }

    fn row(
        &self,
        segment: &SetAssignmentsSegment,
        columns: &[Column],
        table: &str,
        sql: &str,
        rule: &dyn ShardingRule,
    ) -> Result<Row, Error> {
        let mut row = Row {
            insert_value: InsertValue::new(Keyword::Set, segment.parameters_count()),
            and_condition: AndCondition::default(),
            generated_keys: vec![],
        };

        let generate_key_column = rule.find_generate_key_column_name(table);

        for (column, expression) in columns.iter().zip(segment.values()) {
            self.value(&mut row, column, expression, sql, rule, generate_key_column)?;
        }

        Ok(row)
    }

    fn value(
        &self,
        row: &mut Row,
        column: &Column,
        expression: &ExpressionSegment,
        sql: &str,
        rule: &dyn ShardingRule,
        generate_key_column: Option<&str>,
    ) -> Result<(), Error> {
        let sql_expression = expression.to_sql_expression(sql)?;
        row.insert_value.push(sql_expression.clone());

        if rule.is_sharding_column(&column.name, &column.table) {
            if !expression.is_routable() {
                debug!(
                    "complex expression on sharding column \"{}\": {}",
                    column, sql_expression
                );
                return Err(Error::UnsupportedShardingColumnExpression(
                    column.name.clone(),
                ));
            }

            row.and_condition
                .conditions
                .push(Condition::new(column.clone(), sql_expression));
        }

        if generate_key_column.is_some_and(|name| name.eq_ignore_ascii_case(&column.name)) {
            row.generated_keys
                .push(generated_key_condition(column, expression, sql)?);
        }

        Ok(())
    }
}
