//! Routing conditions.

use super::{Column, Scalar, SqlExpression};

/// Equality between a sharding column and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub expression: SqlExpression,
}

impl Condition {
    pub fn new(column: Column, expression: SqlExpression) -> Self {
        Self { column, expression }
    }
}

/// Conditions that must all hold, one per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AndCondition {
    pub conditions: Vec<Condition>,
}

/// Routing predicate of the whole statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrCondition {
    pub and_conditions: Vec<AndCondition>,
}

/// Where the value of a generated key comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedKeySource {
    /// Bound parameter.
    Placeholder(usize),
    /// Literal resolved by the grammar.
    Value(Scalar),
    /// Source text, kept verbatim.
    Raw(String),
}

/// Generated key supplied by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedKeyCondition {
    pub column: Column,
    pub source: GeneratedKeySource,
}

impl GeneratedKeyCondition {
    pub fn new(column: Column, source: GeneratedKeySource) -> Self {
        Self { column, source }
    }

    pub fn placeholder_index(&self) -> Option<usize> {
        match self.source {
            GeneratedKeySource::Placeholder(index) => Some(index),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Scalar> {
        match self.source {
            GeneratedKeySource::Value(ref value) => Some(value),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self.source {
            GeneratedKeySource::Raw(ref raw) => Some(raw.as_str()),
            _ => None,
        }
    }
}
