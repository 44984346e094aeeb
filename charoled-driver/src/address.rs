//! Cursor addressing
//!
//! DDRAM is not laid out row after row: each row starts at its own base
//! address. The table below covers 1 to 4 row modules.

/// Number of rows in the offset table
pub const MAX_ROWS: u8 = 4;

/// DDRAM base address of each row
pub const ROW_OFFSETS: [u8; MAX_ROWS as usize] = [0x00, 0x40, 0x14, 0x54];

/// Bring an out-of-range row back onto the last row
///
/// Only rows strictly above `MAX_ROWS` are clamped, so row 4 passes through
/// unchanged.
pub const fn clamp_row(row: u8) -> u8 {
    if row > MAX_ROWS {
        MAX_ROWS - 1
    } else {
        row
    }
}

/// Base address for a row that has already been clamped
///
/// Row 4 has no table entry and maps onto row 0's base.
pub const fn row_offset(row: u8) -> u8 {
    if (row as usize) < ROW_OFFSETS.len() {
        ROW_OFFSETS[row as usize]
    } else {
        0x00
    }
}

/// DDRAM address of (col, row)
///
/// `col` is not range checked; the sum wraps in 8 bits.
pub const fn cursor_address(col: u8, row: u8) -> u8 {
    col.wrapping_add(row_offset(clamp_row(row)))
}
