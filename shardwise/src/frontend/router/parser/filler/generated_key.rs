//! Generated key supplied in the statement.

use crate::frontend::router::parser::{
    Column, Error, ExpressionKind, ExpressionSegment, GeneratedKeyCondition, GeneratedKeySource,
};

/// Extract the generated key value for `column`.
///
/// Placeholders win over resolved literals, which win over source text.
pub fn generated_key_condition(
    column: &Column,
    expression: &ExpressionSegment,
    sql: &str,
) -> Result<GeneratedKeyCondition, Error> {
    let source = match expression.kind() {
        ExpressionKind::Placeholder(index) => GeneratedKeySource::Placeholder(*index),
        ExpressionKind::Literal(value) => GeneratedKeySource::Value(value.clone()),
        ExpressionKind::Text | ExpressionKind::Complex => {
            GeneratedKeySource::Raw(expression.source(sql)?.to_owned())
        }
    };

    Ok(GeneratedKeyCondition::new(column.clone(), source))
}
