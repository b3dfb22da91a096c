//! Dump command implementation

use sfdpdump_core::sfdp::MAX_IMAGE_SIZE;
use sfdpdump_core::walker::{self, DumpSummary};
use sfdpdump_core::{Error as SfdpError, SfdpImage};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that end the run
#[derive(Debug, Error)]
pub enum DumpError {
    /// Input file could not be opened
    #[error("Can't open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Input could not be read
    #[error("Can't read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The dump is not decodable SFDP
    #[error("'{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: SfdpError,
    },
}

impl DumpError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Open { .. } | Self::Read { .. } => 1,
            Self::Decode { source, .. } => match source {
                SfdpError::SignatureMismatch { .. } => 2,
                SfdpError::InputTooShort { .. } => 3,
                SfdpError::Io(_) => 1,
            },
        }
    }
}

fn display_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

/// Read up to [`MAX_IMAGE_SIZE`] bytes from `path`, or standard input
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, DumpError> {
    let name = display_name(path);
    let reader: Box<dyn Read> = match path {
        Some(p) => Box::new(File::open(p).map_err(|source| DumpError::Open {
            path: name.clone(),
            source,
        })?),
        None => Box::new(io::stdin().lock()),
    };

    let mut data = Vec::with_capacity(MAX_IMAGE_SIZE);
    reader
        .take(MAX_IMAGE_SIZE as u64)
        .read_to_end(&mut data)
        .map_err(|source| DumpError::Read {
            path: name.clone(),
            source,
        })?;

    log::info!("Read {} bytes from {}", data.len(), name);
    Ok(data)
}

/// Decode `path` (or standard input) and print the report to `out`
///
/// Entry warnings go to `err` in directory order, whatever the log filter.
pub fn run_dump(
    path: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<DumpSummary, DumpError> {
    let data = read_input(path)?;
    let decode_err = |source| DumpError::Decode {
        path: display_name(path),
        source,
    };

    let image = SfdpImage::from_bytes(&data).map_err(decode_err)?;
    if image.is_swapped() {
        log::info!("Input has swapped byte order, decoding normalized words");
    }

    let summary = walker::dump(&image, out).map_err(decode_err)?;
    out.flush().map_err(|e| decode_err(SfdpError::Io(e)))?;

    for warning in &summary.warnings {
        writeln!(err, "sfdpdump: {}", warning).map_err(|e| decode_err(SfdpError::Io(e)))?;
    }

    log::info!(
        "Decoded {} of {} parameter tables, {} warning(s)",
        summary.decoded,
        summary.entries,
        summary.warnings.len()
    );
    Ok(summary)
}
