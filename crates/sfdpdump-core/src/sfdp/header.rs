//! SFDP header and parameter header types
//!
//! Types representing SFDP structures as defined by JEDEC JESD216.

/// SFDP signature magic value ("SFDP" in little-endian)
pub const SFDP_SIGNATURE: u32 = 0x50444653;

/// Size of the SFDP header in bytes
pub const SFDP_HEADER_LEN: usize = 8;

/// Size of one parameter header in bytes
pub const PARAM_HEADER_LEN: usize = 8;

/// Basic Flash Parameter Table ID
pub const PARAM_ID_BASIC: u16 = 0xFF00;

// ============================================================================
// SFDP Revision
// ============================================================================

/// SFDP revision information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SfdpRevision {
    /// Major revision number
    pub major: u8,
    /// Minor revision number
    pub minor: u8,
}

impl core::fmt::Display for SfdpRevision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ============================================================================
// SFDP Header
// ============================================================================

/// SFDP header structure (first 8 bytes at address 0x00)
#[derive(Debug, Clone, Copy, Default)]
pub struct SfdpHeader {
    /// SFDP signature (should be 0x50444653)
    pub signature: u32,
    /// SFDP revision
    pub revision: SfdpRevision,
    /// Number of parameter headers (0-based, so actual count is nph + 1)
    pub nph: u8,
    /// Access protocol (0xFF for legacy)
    pub access_protocol: u8,
}

impl SfdpHeader {
    /// Parse SFDP header from raw bytes
    ///
    /// Expects 8 bytes in little-endian format.
    pub fn parse(data: &[u8; SFDP_HEADER_LEN]) -> Self {
        Self {
            signature: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
            revision: SfdpRevision {
                minor: data[4],
                major: data[5],
            },
            nph: data[6],
            access_protocol: data[7],
        }
    }

    /// Check if the signature is valid
    pub fn is_valid(&self) -> bool {
        self.signature == SFDP_SIGNATURE
    }

    /// Get the number of parameter headers
    pub fn num_param_headers(&self) -> usize {
        (self.nph as usize) + 1
    }
}

// ============================================================================
// Parameter Header
// ============================================================================

/// Parameter header structure (8 bytes each, starting at address 0x08)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterHeader {
    /// Parameter ID (MSB << 8 | LSB)
    pub id: u16,
    /// Parameter table revision
    pub revision: SfdpRevision,
    /// Parameter table length in DWORDs
    pub length_dwords: u8,
    /// Parameter table pointer (24-bit byte address)
    pub table_pointer: u32,
}

impl ParameterHeader {
    /// Byte address of the `index`th parameter header
    pub fn address(index: usize) -> usize {
        SFDP_HEADER_LEN + index * PARAM_HEADER_LEN
    }

    /// Parse a parameter header from raw bytes
    ///
    /// Expects 8 bytes in little-endian format.
    pub fn parse(data: &[u8; PARAM_HEADER_LEN]) -> Self {
        Self {
            id: ((data[7] as u16) << 8) | (data[0] as u16),
            revision: SfdpRevision {
                minor: data[1],
                major: data[2],
            },
            length_dwords: data[3],
            table_pointer: u32::from_le_bytes([data[4], data[5], data[6], 0]),
        }
    }

    /// Get the table length in bytes
    pub fn length_bytes(&self) -> usize {
        (self.length_dwords as usize) * 4
    }

    /// Check if the table pointer is DWORD aligned
    pub fn is_aligned(&self) -> bool {
        self.table_pointer % 4 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfdp_header_parse() {
        // "SFDP" signature, rev 1.6, 1 param header, legacy access
        let data = [0x53, 0x46, 0x44, 0x50, 0x06, 0x01, 0x00, 0xFF];
        let header = SfdpHeader::parse(&data);

        assert!(header.is_valid());
        assert_eq!(header.revision, SfdpRevision { major: 1, minor: 6 });
        assert_eq!(header.revision.to_string(), "1.6");
        assert_eq!(header.num_param_headers(), 1);
        assert_eq!(header.access_protocol, 0xFF);
    }

    #[test]
    fn test_param_count_is_stored_plus_one() {
        let data = [0x53, 0x46, 0x44, 0x50, 0x00, 0x01, 0xFF, 0xFF];
        assert_eq!(SfdpHeader::parse(&data).num_param_headers(), 256);
    }

    #[test]
    fn test_param_header_parse() {
        // BFPT: ID=0xFF00, rev 1.6, 16 DWORDs, pointer 0x000080
        let data = [0x00, 0x06, 0x01, 0x10, 0x80, 0x00, 0x00, 0xFF];
        let header = ParameterHeader::parse(&data);

        assert!(header.is_aligned());
        assert_eq!(header.id, 0xFF00);
        assert_eq!(header.revision, SfdpRevision { major: 1, minor: 6 });
        assert_eq!(header.length_dwords, 16);
        assert_eq!(header.length_bytes(), 64);
        assert_eq!(header.table_pointer, 0x80);
    }

    #[test]
    fn test_param_header_id_and_pointer_bytes() {
        // Vendor table 0x01C2, 24-bit pointer spread over three bytes
        let data = [0xC2, 0x00, 0x01, 0x04, 0x45, 0x23, 0x01, 0x01];
        let header = ParameterHeader::parse(&data);

        assert_eq!(header.id, 0x01C2);
        assert_eq!(header.table_pointer, 0x012345);
        assert!(!header.is_aligned());
        assert_eq!(ParameterHeader::address(0), 8);
        assert_eq!(ParameterHeader::address(2), 24);
    }
}
