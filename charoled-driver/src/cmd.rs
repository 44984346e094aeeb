//! Instruction set
//!
//! Every command byte is a base opcode ORed with instruction-specific flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base opcodes
pub mod op {
    /// Clear display, cursor to address 0
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Cursor to address 0, undo display shift
    pub const RETURN_HOME: u8 = 0x02;
    /// Entry mode set
    pub const ENTRY_MODE: u8 = 0x04;
    /// Display on/off control
    pub const DISPLAY_CONTROL: u8 = 0x08;
    /// Function set (8-bit interface, 2 lines)
    pub const FUNCTION_SET: u8 = 0x38;
    /// Set DDRAM address
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// Entry mode flags
pub mod entry {
    pub const CURSOR_INCREMENT: u8 = 0x02;
    pub const CURSOR_DECREMENT: u8 = 0x00;
    pub const SHIFT_RIGHT: u8 = 0x01;
    pub const SHIFT_LEFT: u8 = 0x00;
}

/// Display control flags
pub mod control {
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
}

/// Built-in character table, selected through function set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum CharacterTable {
    #[default]
    EnglishJapanese = 0x00,
    WesternEuropean1 = 0x01,
    EnglishRussian = 0x02,
    WesternEuropean2 = 0x03,
}

impl From<CharacterTable> for u8 {
    fn from(table: CharacterTable) -> Self {
        table as u8
    }
}

/// Entry mode: what the device does with the cursor after each data byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntryMode {
    /// Move the cursor right (true) or left (false)
    pub increment: bool,
    /// Shift the whole display right instead of moving the cursor
    pub shift_right: bool,
}

impl Default for EntryMode {
    fn default() -> Self {
        Self {
            increment: true,
            shift_right: false,
        }
    }
}

impl EntryMode {
    /// Flag bits for the entry mode command
    pub const fn bits(&self) -> u8 {
        let direction = if self.increment {
            entry::CURSOR_INCREMENT
        } else {
            entry::CURSOR_DECREMENT
        };
        let shift = if self.shift_right {
            entry::SHIFT_RIGHT
        } else {
            entry::SHIFT_LEFT
        };
        direction | shift
    }
}

impl From<EntryMode> for u8 {
    fn from(mode: EntryMode) -> Self {
        mode.bits()
    }
}
