//! Basic Flash Parameter Table (ID 0xFF00)
//!
//! Decodes the first 11 DWORDs of the JESD216 BFPT. Every DWORD is optional:
//! decoding stops quietly at the declared table length.

use std::io;

use crate::bits::{bit, bits};
use crate::format::FieldWriter;
use crate::lookup::{LookupTable, INVALID_VALUE, SUPPORTED};

/// DWORD 1 bits [1:0]: 01b and 11b are the defined encodings
const ERASE_SIZE: LookupTable = &[None, Some("4kB supported"), None, Some("4kB supported")];

const WRITE_GRANULARITY: LookupTable = &[
    Some("Single byte or less than 64 bytes"),
    Some("64 bytes or more"),
];

const STATUS_REGISTER: LookupTable = &[Some("non-volatile"), Some("volatile")];

const VOLATILE_SR_WRITE_ENABLE: LookupTable = &[Some("50h"), Some("06h")];

const ADDRESS_BYTES: LookupTable = &[
    Some("3-byte addressing"),
    Some("3- or 4-byte addressing"),
    Some("4-byte addressing"),
];

/// Erase time units in milliseconds
const ERASE_TIME_UNITS: [u32; 4] = [1, 16, 128, 1000];
/// Page program time units in microseconds
const PAGE_PROGRAM_TIME_UNITS: [u32; 2] = [8, 64];
/// Byte program time units in microseconds
const BYTE_PROGRAM_TIME_UNITS: [u32; 2] = [1, 8];
/// Chip erase time units in milliseconds
const CHIP_ERASE_TIME_UNITS: [u32; 4] = [16, 256, 4000, 64000];

/// Decode a Basic Flash Parameter Table
pub fn decode(words: &[u32], out: &mut FieldWriter<'_>) -> io::Result<()> {
    let Some(&dword) = words.first() else {
        return Ok(());
    };
    decode_dword1(dword, out)?;

    let Some(&dword) = words.get(1) else {
        return Ok(());
    };
    decode_density(dword, out)?;

    // DWORDs 3-4: 1-4-4/1-1-4 and 1-1-2/1-2-2 fast read parameters
    let Some(&dword) = words.get(2) else {
        return Ok(());
    };
    fast_read_params(dword, 0, "1-4-4", out)?;
    fast_read_params(dword, 16, "1-1-4", out)?;

    let Some(&dword) = words.get(3) else {
        return Ok(());
    };
    fast_read_params(dword, 0, "1-1-2", out)?;
    fast_read_params(dword, 16, "1-2-2", out)?;

    let Some(&dword) = words.get(4) else {
        return Ok(());
    };
    out.lookup(bits(dword, 0, 0), "2-2-2 Fast Read", SUPPORTED)?;
    out.lookup(bits(dword, 4, 4), "4-4-4 Fast Read", SUPPORTED)?;

    // DWORDs 6-7: only the high halves are defined
    let Some(&dword) = words.get(5) else {
        return Ok(());
    };
    fast_read_params(dword, 16, "2-2-2", out)?;

    let Some(&dword) = words.get(6) else {
        return Ok(());
    };
    fast_read_params(dword, 16, "4-4-4", out)?;

    let Some(&dword) = words.get(7) else {
        return Ok(());
    };
    erase_type(dword, 0, 1, out)?;
    erase_type(dword, 16, 2, out)?;

    let Some(&dword) = words.get(8) else {
        return Ok(());
    };
    erase_type(dword, 0, 3, out)?;
    erase_type(dword, 16, 4, out)?;

    let Some(&dword) = words.get(9) else {
        return Ok(());
    };
    decode_erase_times(dword, out)?;

    let Some(&dword) = words.get(10) else {
        return Ok(());
    };
    decode_program_times(dword, out)
}

/// DWORD 1: erase/write granularity, addressing and fast read support
fn decode_dword1(dword: u32, out: &mut FieldWriter<'_>) -> io::Result<()> {
    out.lookup(bits(dword, 1, 0), "Erase Size", ERASE_SIZE)?;
    out.lookup(bits(dword, 2, 2), "Write Granularity", WRITE_GRANULARITY)?;
    out.lookup(
        bits(dword, 3, 3),
        "Volatile Status Register Block Protect Bits",
        STATUS_REGISTER,
    )?;
    out.lookup(
        bits(dword, 4, 4),
        "Write Enable Instruction for Writing to Volatile Status Register",
        VOLATILE_SR_WRITE_ENABLE,
    )?;
    out.hex(bits(dword, 15, 8), "4kB Erase Instruction", None)?;
    out.lookup(bits(dword, 16, 16), "1-1-2 Fast Read", SUPPORTED)?;
    out.lookup(bits(dword, 18, 17), "Address Bytes", ADDRESS_BYTES)?;
    out.lookup(
        bits(dword, 19, 19),
        "Double transfer rate (DTR) Clocking",
        SUPPORTED,
    )?;
    out.lookup(bits(dword, 20, 20), "1-2-2 Fast Read", SUPPORTED)?;
    out.lookup(bits(dword, 21, 21), "1-4-4 Fast Read", SUPPORTED)?;
    out.lookup(bits(dword, 22, 22), "1-1-4 Fast Read", SUPPORTED)
}

/// DWORD 2: flash memory density
fn decode_density(dword: u32, out: &mut FieldWriter<'_>) -> io::Result<()> {
    let value = bits(dword, 30, 0);
    if bit(dword, 31) {
        // 2^N bits, printed in megabytes
        match value.checked_sub(23).and_then(|n| 1u32.checked_shl(n)) {
            Some(megabytes) => out.dec(megabytes, "Flash Memory Density", Some("in megabytes")),
            None => out.dec(0, "Flash Memory Density", Some(INVALID_VALUE)),
        }
    } else {
        out.dec(value / 8, "Flash Memory Density", Some("in bytes"))
    }
}

/// Wait states, mode clocks and instruction of one fast read mode
///
/// `shift` selects the low (0) or high (16) half of the DWORD.
fn fast_read_params(
    dword: u32,
    shift: u32,
    mode: &str,
    out: &mut FieldWriter<'_>,
) -> io::Result<()> {
    let half = dword >> shift;
    out.dec(
        bits(half, 4, 0),
        &format!("{} Fast Read Number of Wait States Needed", mode),
        None,
    )?;
    out.dec(
        bits(half, 7, 5),
        &format!("{} Fast Read Number of Mode Clocks", mode),
        None,
    )?;
    out.hex(
        bits(half, 15, 8),
        &format!("{} Fast Read Instructions", mode),
        None,
    )
}

/// Size and instruction of one erase type
///
/// Size exponent 0 marks types 2-4 as unused. Type 1 is mandatory.
fn erase_type(dword: u32, shift: u32, number: u32, out: &mut FieldWriter<'_>) -> io::Result<()> {
    let half = dword >> shift;
    let exponent = bits(half, 7, 0);
    let name = format!("Erase Type {} Size", number);

    match 1u32.checked_shl(exponent) {
        Some(size) => {
            let description = if exponent == 0 && number != 1 {
                "not supported"
            } else {
                "in bytes"
            };
            out.dec(size, &name, Some(description))?;
        }
        None => out.dec(0, &name, Some(INVALID_VALUE))?,
    }

    out.hex(
        bits(half, 15, 8),
        &format!("Erase Type {} Instruction", number),
        None,
    )
}

/// `units[unit] * (count + 1)`
fn typical_time(units: &[u32], unit: u32, count: u32) -> u32 {
    units[unit as usize] * (count + 1)
}

/// Typical to maximum time multiplier, bits [3:0]
fn max_time_multiplier(dword: u32) -> u32 {
    2 * (1 + bits(dword, 3, 0))
}

/// DWORD 10: erase type typical times
fn decode_erase_times(dword: u32, out: &mut FieldWriter<'_>) -> io::Result<()> {
    out.dec(
        max_time_multiplier(dword),
        "Typical Erase Time to Maximum Erase Time Multiplier",
        None,
    )?;

    // (units bits, count bits) per erase type
    let groups = [
        (bits(dword, 10, 9), bits(dword, 8, 4)),
        (bits(dword, 17, 16), bits(dword, 15, 11)),
        (bits(dword, 24, 23), bits(dword, 22, 18)),
        (bits(dword, 31, 30), bits(dword, 29, 25)),
    ];
    for (i, (unit, count)) in groups.into_iter().enumerate() {
        out.dec(
            typical_time(&ERASE_TIME_UNITS, unit, count),
            &format!("Erase Type {} Typical Time", i + 1),
            Some("in milliseconds"),
        )?;
    }
    Ok(())
}

/// DWORD 11: page size, program and chip erase times
fn decode_program_times(dword: u32, out: &mut FieldWriter<'_>) -> io::Result<()> {
    out.dec(
        max_time_multiplier(dword),
        "Typical Program Time to Maximum Program Time Multiplier",
        None,
    )?;
    out.dec(1 << bits(dword, 7, 4), "Page Size", None)?;
    out.dec(
        typical_time(&PAGE_PROGRAM_TIME_UNITS, bits(dword, 13, 13), bits(dword, 12, 8)),
        "Typical Page Program Time",
        Some("in microseconds"),
    )?;
    out.dec(
        typical_time(&BYTE_PROGRAM_TIME_UNITS, bits(dword, 18, 18), bits(dword, 17, 14)),
        "Typical First Byte Program Time",
        Some("in microseconds"),
    )?;
    out.dec(
        typical_time(&BYTE_PROGRAM_TIME_UNITS, bits(dword, 23, 23), bits(dword, 22, 19)),
        "Typical Additional Byte Program Time",
        Some("in microseconds"),
    )?;
    out.dec(
        typical_time(&CHIP_ERASE_TIME_UNITS, bits(dword, 30, 29), bits(dword, 28, 24)),
        "Typical Chip Erase Time",
        Some("in milliseconds"),
    )
}
