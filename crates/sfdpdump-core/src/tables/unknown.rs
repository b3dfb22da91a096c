//! Raw DWORD dump for tables without a decoder

use std::io;

use crate::format::FieldWriter;

pub(super) fn decode(words: &[u32], out: &mut FieldWriter<'_>) -> io::Result<()> {
    for (i, &word) in words.iter().enumerate() {
        out.hex(word, &format!("Word {}", i), None)?;
    }
    Ok(())
}
