//! CLI command implementations

mod dump;

pub use dump::run_dump;
