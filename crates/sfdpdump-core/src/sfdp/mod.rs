//! SFDP (Serial Flash Discoverable Parameters) structures
//!
//! This module implements the container layer of SFDP data as defined by
//! JEDEC JESD216. The structure contains:
//!
//! - An SFDP header with signature and revision info
//! - One or more parameter headers describing available tables
//! - Parameter tables containing capability information
//!
//! Decoding of the tables themselves lives in [`crate::tables`].

mod header;
mod image;

pub use header::*;
pub use image::*;
