//! sfdpdump-core - Decoder for SFDP parameter dumps
//!
//! This crate turns a raw SFDP (Serial Flash Discoverable Parameters, JEDEC
//! JESD216) dump into the line-oriented report printed by `sfdpdump`.
//!
//! # Overview
//!
//! - [`SfdpImage`] owns the input buffer, normalizes its byte order and
//!   validates the SFDP signature
//! - [`walker::dump`] walks the parameter header directory and dispatches
//!   each table to a handler from [`tables`]
//! - handlers extract bit-fields with [`bits::bits`] and print them through a
//!   [`FieldWriter`]
//!
//! # Example
//!
//! ```ignore
//! use sfdpdump_core::{walker, SfdpImage};
//!
//! let image = SfdpImage::from_bytes(&data)?;
//! let summary = walker::dump(&image, &mut std::io::stdout())?;
//! for warning in &summary.warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bits;
pub mod error;
pub mod format;
pub mod lookup;
pub mod sfdp;
pub mod tables;
pub mod walker;

pub use error::{EntryWarning, Error, Result};
pub use format::{FieldWriter, Radix};
pub use sfdp::{ParameterHeader, SfdpHeader, SfdpImage};
