//! Metadata about the databases behind the front-end.

pub mod schema;

pub use schema::{Relation, Schema, TableCatalog};
