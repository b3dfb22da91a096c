//! Bit-field extraction from SFDP DWORDs

/// Extract the inclusive bit range `[low, high]` of `word`, right-aligned
///
/// Bit numbering follows JESD216: bit 0 is the least significant bit.
///
/// # Panics
///
/// Panics if `low > high` or `high > 31`. Ranges are fixed by the table
/// layouts, so this is a programming error rather than bad input. In const
/// context the check happens at compile time.
pub const fn bits(word: u32, high: u32, low: u32) -> u32 {
    assert!(low <= high && high <= 31, "invalid bit range");
    (word & (u32::MAX >> (31 - high))) >> low
}

/// Test a single bit of `word`
pub const fn bit(word: u32, n: u32) -> bool {
    bits(word, n, n) != 0
}
