//! SQL front-end.

pub mod router;
