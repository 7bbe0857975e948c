//! Writers for the finalized translation table.
//!
//! One row/record per key, one column/field per language, empty string for
//! missing translations. The table itself owns no serialization format;
//! these writers consume it read-only.

pub mod csv;
pub mod json;
