//! Display control register mirror
//!
//! The device cannot be read back, so the driver keeps the authoritative
//! copy of the display control register and resends all three flags on
//! every change.

use crate::cmd::{control, op};

/// Display on/off, cursor and blink flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayControl {
    /// Display on
    pub display: bool,
    /// Underline cursor visible
    pub cursor: bool,
    /// Cursor cell blinks
    pub blink: bool,
}

impl Default for DisplayControl {
    /// Display on, cursor off, blink off
    fn default() -> Self {
        Self {
            display: true,
            cursor: false,
            blink: false,
        }
    }
}

impl DisplayControl {
    /// Flag bits without the opcode
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.display {
            bits |= control::DISPLAY_ON;
        }
        if self.cursor {
            bits |= control::CURSOR_ON;
        }
        if self.blink {
            bits |= control::BLINK_ON;
        }
        bits
    }

    /// Complete command byte for this register value
    pub const fn command(&self) -> u8 {
        op::DISPLAY_CONTROL | self.bits()
    }
}
