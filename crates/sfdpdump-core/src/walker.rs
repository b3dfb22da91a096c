//! Parameter header directory walk
//!
//! Prints the SFDP header block, then one block per parameter header. A bad
//! entry only loses its own table data; the walk always visits every entry.

use std::io::Write;

use crate::error::{EntryWarning, Result};
use crate::format::FieldWriter;
use crate::sfdp::{ParameterHeader, SfdpImage, PARAM_HEADER_LEN};
use crate::tables;

/// Outcome of a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Number of parameter headers visited
    pub entries: usize,
    /// Number of tables handed to a decoder
    pub decoded: usize,
    /// Recoverable problems, in directory order
    pub warnings: Vec<EntryWarning>,
}

impl DumpSummary {
    fn warn(&mut self, warning: EntryWarning) {
        log::debug!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Print the full report for `image` to `out`
///
/// Only failures of `out` itself are returned as errors.
pub fn dump(image: &SfdpImage, out: &mut dyn Write) -> Result<DumpSummary> {
    let mut w = FieldWriter::new(out);
    let header = image.header();

    w.hex(
        header.signature,
        "Signature",
        Some("Must be 0x50444653 ('S', 'F', 'D', 'P')"),
    )?;
    w.dec(header.revision.major.into(), "Major", None)?;
    w.dec(header.revision.minor.into(), "Minor", None)?;
    w.dec(header.num_param_headers() as u32, "Parameters", None)?;
    w.dec(image.len() as u32, "Total length", None)?;

    let mut summary = DumpSummary::default();
    for index in 0..header.num_param_headers() {
        summary.entries += 1;

        if !image.contains(ParameterHeader::address(index), PARAM_HEADER_LEN) {
            summary.warn(EntryWarning::HeaderBeyondEnd { index });
        }

        let param = image.param_header(index);
        let handler = tables::find_handler(param.id);
        log::debug!(
            "Parameter {}: ID 0x{:04X} rev {} at 0x{:06X}, {} DWORDs -> {}",
            index,
            param.id,
            param.revision,
            param.table_pointer,
            param.length_dwords,
            handler.name
        );

        w.raw(format_args!("\n\nParameter {} ({})\n", index, handler.name))?;
        w.hex(param.id.into(), "ID", None)?;
        w.dec(param.revision.major.into(), "Major", None)?;
        w.dec(param.revision.minor.into(), "Minor", None)?;
        w.dec(
            param.table_pointer,
            "Offset",
            (!param.is_aligned()).then_some("Invalid alignment"),
        )?;
        w.dec(param.length_bytes() as u32, "Length", None)?;

        if !param.is_aligned() {
            summary.warn(EntryWarning::UnalignedOffset {
                index,
                id: param.id,
                offset: param.table_pointer,
            });
            continue;
        }

        match image.table(&param) {
            Some(words) => {
                (handler.decode)(words, &mut w)?;
                summary.decoded += 1;
            }
            None => summary.warn(EntryWarning::BeyondEnd {
                index,
                id: param.id,
                offset: param.table_pointer,
                len: param.length_bytes(),
            }),
        }
    }

    log::debug!(
        "{} parameter header(s), {} field line(s)",
        summary.entries,
        w.field_count()
    );
    Ok(summary)
}
