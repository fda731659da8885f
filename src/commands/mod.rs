//! Command implementations for the courtside CLI

pub mod extract;
pub mod query;
