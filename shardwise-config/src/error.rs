//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("sharded table entry #{0} has no column")]
    NoShardingColumn(usize),

    #[error("encrypted table entry #{0} has no name")]
    NoEncryptedTableName(usize),
}

impl Error {
    /// Attach the line number of the offending
    /// config entry to the deserialization error.
    pub fn config(source: &str, err: toml::de::Error) -> Self {
        let line = err
            .span()
            .map(|span| source[..span.start.min(source.len())].matches('\n').count() + 1)
            .unwrap_or(0);

        Self::Parse {
            line,
            message: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Config;

    #[test]
    fn test_parse_error_line() {
        let source = "[[sharded_tables]]\nname = \"user\"\ncolumn = 5\n";
        let err = toml::from_str::<Config>(source).unwrap_err();
        let err = Error::config(source, err);

        match err {
            Error::Parse { line, .. } => assert_eq!(line, 3),
            _ => panic!("expected a parse error"),
        }
    }
}
