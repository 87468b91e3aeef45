//! Positional markers for the SQL rewriter.

/// Identifier quoting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteCharacter {
    #[default]
    None,
    /// `"name"`
    Quote,
    /// `` `name` ``
    BackQuote,
    /// `[name]`
    Brackets,
    /// `'name'`
    SingleQuote,
}

impl QuoteCharacter {
    /// Detect quoting from the first character of an identifier
    /// as written in the source text.
    pub fn detect(source: &str) -> Self {
        match source.chars().next() {
            Some('"') => Self::Quote,
            Some('`') => Self::BackQuote,
            Some('[') => Self::Brackets,
            Some('\'') => Self::SingleQuote,
            _ => Self::None,
        }
    }
}

/// Keyword that introduced the row values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Set,
}

/// Table name the rewriter replaces with the physical table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableToken {
    pub start: usize,
    pub table_name: String,
    pub quote: QuoteCharacter,
}

/// Start of the row values clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertValuesToken {
    pub start: usize,
    pub keyword: Keyword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlToken {
    Table(TableToken),
    InsertValues(InsertValuesToken),
}

impl From<TableToken> for SqlToken {
    fn from(value: TableToken) -> Self {
        Self::Table(value)
    }
}

impl From<InsertValuesToken> for SqlToken {
    fn from(value: InsertValuesToken) -> Self {
        Self::InsertValues(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_detect_quote() {
        assert_eq!(QuoteCharacter::detect("`user`.name"), QuoteCharacter::BackQuote);
        assert_eq!(QuoteCharacter::detect("\"user\".name"), QuoteCharacter::Quote);
        assert_eq!(QuoteCharacter::detect("[user].name"), QuoteCharacter::Brackets);
        assert_eq!(QuoteCharacter::detect("user.name"), QuoteCharacter::None);
        assert_eq!(QuoteCharacter::detect(""), QuoteCharacter::None);
    }
}
