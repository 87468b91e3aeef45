//! Value expressions, as produced by the grammar and
//! as bound to the statement.

use std::fmt::Display;

use super::{Error, Scalar};

/// What the grammar recognized on the right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    /// Statement parameter, zero-based.
    Placeholder(usize),
    /// Literal with a resolved value.
    Literal(Scalar),
    /// Quoted string literal. The value is the source text.
    Text,
    /// Anything else, e.g. function calls or arithmetic.
    Complex,
}

/// Value expression segment.
///
/// `start` and `stop` are byte offsets into the original SQL,
/// `stop` pointing at the last byte of the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionSegment {
    kind: ExpressionKind,
    start: usize,
    stop: usize,
}

impl ExpressionSegment {
    pub fn new(kind: ExpressionKind, start: usize, stop: usize) -> Self {
        Self { kind, start, stop }
    }

    pub fn placeholder(index: usize, start: usize, stop: usize) -> Self {
        Self::new(ExpressionKind::Placeholder(index), start, stop)
    }

    pub fn literal(value: impl Into<Scalar>, start: usize, stop: usize) -> Self {
        Self::new(ExpressionKind::Literal(value.into()), start, stop)
    }

    pub fn text(start: usize, stop: usize) -> Self {
        Self::new(ExpressionKind::Text, start, stop)
    }

    pub fn complex(start: usize, stop: usize) -> Self {
        Self::new(ExpressionKind::Complex, start, stop)
    }

    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    /// The expression resolves to a concrete value or a parameter
    /// at route time.
    pub fn is_routable(&self) -> bool {
        match self.kind {
            ExpressionKind::Placeholder(_) | ExpressionKind::Literal(_) | ExpressionKind::Text => {
                true
            }
            ExpressionKind::Complex => false,
        }
    }

    /// Source text covered by this expression.
    pub fn source<'a>(&self, sql: &'a str) -> Result<&'a str, Error> {
        if self.stop < self.start {
            return Err(self.span_error());
        }

        sql.get(self.start..=self.stop)
            .ok_or_else(|| self.span_error())
    }

    /// Convert to the statement's expression representation.
    pub fn to_sql_expression(&self, sql: &str) -> Result<SqlExpression, Error> {
        Ok(match self.kind {
            ExpressionKind::Placeholder(index) => SqlExpression::Placeholder(index),
            ExpressionKind::Literal(ref value) => SqlExpression::Literal(value.clone()),
            ExpressionKind::Text => SqlExpression::Text(self.source(sql)?.to_owned()),
            ExpressionKind::Complex => SqlExpression::Ignore(self.source(sql)?.to_owned()),
        })
    }

    fn span_error(&self) -> Error {
        Error::ExpressionSpan {
            start: self.start,
            stop: self.stop,
        }
    }
}

/// Expression bound to an `INSERT` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpression {
    Placeholder(usize),
    Literal(Scalar),
    /// String literal, quotes included.
    Text(String),
    /// Expression the router can't evaluate, kept verbatim.
    Ignore(String),
}

impl SqlExpression {
    /// String literal without its quotes.
    pub fn text_value(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(unquote(text)),
            _ => None,
        }
    }
}

impl Display for SqlExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placeholder(_) => write!(f, "?"),
            Self::Literal(value) => write!(f, "{}", value),
            Self::Text(text) | Self::Ignore(text) => write!(f, "{}", text),
        }
    }
}

fn unquote(text: &str) -> String {
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            let doubled = format!("{}{}", quote, quote);
            return text[1..text.len() - 1].replace(&doubled, &quote.to_string());
        }
    }

    text.to_owned()
}
