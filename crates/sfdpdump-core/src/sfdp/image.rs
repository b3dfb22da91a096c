//! In-memory SFDP dump
//!
//! The dump is held as little-endian DWORDs. Dumps taken with the wrong word
//! byte order are detected from the signature and swapped once up front, so
//! everything after [`SfdpImage::from_bytes`] sees canonical data.

use crate::error::{Error, Result};

use super::header::*;

/// Maximum number of bytes taken from the input (4096 DWORDs)
pub const MAX_IMAGE_SIZE: usize = 4096 * 4;

/// Validated SFDP dump
#[derive(Debug, Clone)]
pub struct SfdpImage {
    words: Vec<u32>,
    len: usize,
    swapped: bool,
    header: SfdpHeader,
}

impl SfdpImage {
    /// Build an image from raw dump bytes
    ///
    /// Bytes past [`MAX_IMAGE_SIZE`] are ignored. Fails if the input is
    /// shorter than the SFDP header or the signature matches in neither
    /// byte order.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() > MAX_IMAGE_SIZE {
            log::debug!(
                "Ignoring {} bytes past the {} byte limit",
                data.len() - MAX_IMAGE_SIZE,
                MAX_IMAGE_SIZE
            );
        }
        let data = &data[..data.len().min(MAX_IMAGE_SIZE)];

        if data.len() < SFDP_HEADER_LEN {
            return Err(Error::InputTooShort {
                len: data.len(),
                min: SFDP_HEADER_LEN,
            });
        }

        // A trailing partial word is zero padded
        let mut words: Vec<u32> = data
            .chunks(4)
            .map(|chunk| {
                let mut buf = [0u8; 4];
                buf[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(buf)
            })
            .collect();

        let found = words[0];
        let swapped = found == SFDP_SIGNATURE.swap_bytes();
        if swapped {
            log::debug!("SFDP signature is byte swapped, swapping all words");
            // Only whole words are swapped
            for word in &mut words[..data.len() / 4] {
                *word = word.swap_bytes();
            }
        }

        let mut image = Self {
            words,
            len: data.len(),
            swapped,
            header: SfdpHeader::default(),
        };
        image.header = SfdpHeader::parse(&image.read(0));
        if !image.header.is_valid() {
            return Err(Error::SignatureMismatch {
                found,
                expected: SFDP_SIGNATURE,
            });
        }

        log::debug!(
            "SFDP header valid: revision {}, {} parameter header(s), access protocol 0x{:02X}",
            image.header.revision,
            image.header.num_param_headers(),
            image.header.access_protocol
        );

        Ok(image)
    }

    /// The parsed SFDP header
    pub fn header(&self) -> &SfdpHeader {
        &self.header
    }

    /// Number of bytes in the dump, never less than the SFDP header
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the input had to be byte swapped
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// Read one byte, zero past the end of the dump
    pub fn byte(&self, addr: usize) -> u8 {
        if addr >= self.len {
            return 0;
        }
        (self.words[addr / 4] >> ((addr % 4) * 8)) as u8
    }

    /// Read `N` bytes starting at `addr`, zero past the end of the dump
    pub fn read<const N: usize>(&self, addr: usize) -> [u8; N] {
        core::array::from_fn(|i| self.byte(addr + i))
    }

    /// Check if `len` bytes starting at `addr` lie inside the dump
    pub fn contains(&self, addr: usize, len: usize) -> bool {
        addr.checked_add(len).is_some_and(|end| end <= self.len)
    }

    /// Read the `index`th parameter header
    pub fn param_header(&self, index: usize) -> ParameterHeader {
        ParameterHeader::parse(&self.read(ParameterHeader::address(index)))
    }

    /// Borrow the DWORDs of a parameter table
    ///
    /// Returns `None` unless the table is DWORD aligned and lies entirely
    /// inside the dump.
    pub fn table(&self, header: &ParameterHeader) -> Option<&[u32]> {
        let offset = header.table_pointer as usize;
        if !header.is_aligned() || !self.contains(offset, header.length_bytes()) {
            return None;
        }
        let start = offset / 4;
        Some(&self.words[start..start + header.length_dwords as usize])
    }
}
