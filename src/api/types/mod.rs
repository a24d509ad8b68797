//! Request and response types for the calendar REST API.

pub mod language;

pub use language::*;
