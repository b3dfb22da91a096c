//! Descriptive tables for enumerated bit-fields
//!
//! A table is indexed by the raw field value. Reserved encodings are `None`
//! slots, and a value past the end of the table is treated the same way.

/// Description table indexed by field value
pub type LookupTable = &'static [Option<&'static str>];

/// Description used for reserved or out of range encodings
pub const INVALID_VALUE: &str = "Invalid value";

/// Shared table for one-bit "is this mode supported" flags
pub const SUPPORTED: LookupTable = &[Some("not supported"), Some("supported")];

/// Resolve `value` to its description
pub fn describe(table: LookupTable, value: u32) -> &'static str {
    usize::try_from(value)
        .ok()
        .and_then(|i| table.get(i).copied().flatten())
        .unwrap_or(INVALID_VALUE)
}
