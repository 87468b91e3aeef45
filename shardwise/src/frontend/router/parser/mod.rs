//! Query parser.

pub mod column;
pub mod condition;
pub mod error;
pub mod expression;
pub mod filler;
pub mod insert;
pub mod segment;
pub mod token;
pub mod value;

pub use column::Column;
pub use condition::{AndCondition, Condition, GeneratedKeyCondition, GeneratedKeySource, OrCondition};
pub use error::Error;
pub use expression::{ExpressionKind, ExpressionSegment, SqlExpression};
pub use filler::{SegmentFiller, SetAssignmentsFiller};
pub use insert::{InsertStatement, InsertValue};
pub use segment::{ColumnSegment, SetAssignmentsSegment};
pub use token::{InsertValuesToken, Keyword, QuoteCharacter, SqlToken, TableToken};
pub use value::Scalar;
