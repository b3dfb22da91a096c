//! Error types for sfdpdump-core
//!
//! Only [`Error`] aborts a decode. Problems confined to a single parameter
//! table are reported as [`EntryWarning`] and the directory walk carries on.

use std::io;
use thiserror::Error;

/// Fatal decode errors
#[derive(Debug, Error)]
pub enum Error {
    /// Input is shorter than the fixed SFDP header
    #[error("input is {len} bytes, shorter than the {min} byte SFDP header")]
    InputTooShort {
        /// Number of bytes actually read
        len: usize,
        /// Minimum number of bytes required
        min: usize,
    },

    /// Signature matches in neither byte order
    #[error("invalid signature {found:#010x}, expected {expected:#010x}")]
    SignatureMismatch {
        /// Signature word as found in the input
        found: u32,
        /// The SFDP magic
        expected: u32,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Recoverable per-entry conditions found while walking the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryWarning {
    /// Table pointer is not a multiple of 4
    #[error("Unaligned offset of parameter {id} (offset {offset})")]
    UnalignedOffset {
        /// Directory index
        index: usize,
        /// Parameter ID
        id: u16,
        /// Table pointer in bytes
        offset: u32,
    },

    /// Table extends past the end of the input
    #[error("Parameter {id} data are behind the end of the file (offset {offset}, {len} bytes)")]
    BeyondEnd {
        /// Directory index
        index: usize,
        /// Parameter ID
        id: u16,
        /// Table pointer in bytes
        offset: u32,
        /// Table length in bytes
        len: usize,
    },

    /// The parameter header itself lies (partly) past the end of the input
    #[error("Parameter header {index} is behind the end of the file, missing bytes read as zero")]
    HeaderBeyondEnd {
        /// Directory index
        index: usize,
    },
}

impl EntryWarning {
    /// Directory index of the entry this warning belongs to
    pub fn index(&self) -> usize {
        match *self {
            Self::UnalignedOffset { index, .. }
            | Self::BeyondEnd { index, .. }
            | Self::HeaderBeyondEnd { index } => index,
        }
    }
}

/// Result type alias using the core Error type
pub type Result<T> = std::result::Result<T, Error>;
