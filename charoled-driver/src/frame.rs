//! Transaction framing
//!
//! One transaction latches ten bits on ten rising clock edges:
//! - PREAMBLE (2 bits): `1 0` for character data, `0 0` for commands
//! - VALUE (8 bits): the byte, most significant bit first
//!
//! Chip select is held low for the whole transaction.

/// Bits latched per transaction
pub const FRAME_BITS: usize = 10;

/// Whether a byte is an instruction or character data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionMode {
    /// Instruction register write
    Command,
    /// DDRAM write (character code)
    Data,
}

/// The two preamble bits for a mode
pub const fn preamble(mode: TransactionMode) -> [bool; 2] {
    match mode {
        TransactionMode::Data => [true, false],
        TransactionMode::Command => [false, false],
    }
}

/// Bits of a byte, most significant first
pub const fn bits_msb_first(value: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    let mut i = 0;
    while i < 8 {
        bits[i] = value & (0x80 >> i) != 0;
        i += 1;
    }
    bits
}

/// Data line level at each clock pulse of a transaction
pub const fn encode_frame(value: u8, mode: TransactionMode) -> [bool; FRAME_BITS] {
    let head = preamble(mode);
    let body = bits_msb_first(value);
    let mut frame = [false; FRAME_BITS];
    frame[0] = head[0];
    frame[1] = head[1];
    let mut i = 0;
    while i < 8 {
        frame[2 + i] = body[i];
        i += 1;
    }
    frame
}

/// Recover mode and value from ten latched bits
///
/// Returns `None` if the preamble is not one the device understands.
pub fn decode_frame(bits: &[bool; FRAME_BITS]) -> Option<(u8, TransactionMode)> {
    let mode = match (bits[0], bits[1]) {
        (true, false) => TransactionMode::Data,
        (false, false) => TransactionMode::Command,
        _ => return None,
    };

    let value = bits[2..]
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | bit as u8);

    Some((value, mode))
}
