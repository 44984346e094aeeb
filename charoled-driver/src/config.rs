//! Driver configuration
//!
//! Pin assignment plus the protocol timing. The timing defaults are the
//! values the display needs; override them only for slower controllers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use charoled_hal::PinAssignment;

use crate::cmd::{CharacterTable, EntryMode};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two link lines are mapped to the same pin
    DuplicatePin,
    /// Clock hold below 1µs
    ClockPulseTooShort,
    /// Per-bit settle below 100µs
    SettleTooShort,
    /// Register command settle below 500µs
    CommandSettleTooShort,
    /// Clear/home settle below 2000µs
    SlowCommandSettleTooShort,
    /// Power-on wait below 500ms
    PowerOnTooShort,
}

/// Protocol timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Clock low and clock high hold time (enable pulse must exceed 450ns)
    pub clock_hold_us: u32,
    /// Hold after each clock pulse before the next bit or transaction
    pub bit_settle_us: u32,
    /// Settle after display control, entry mode and function set
    pub command_settle_us: u32,
    /// Settle after clear and home
    pub slow_command_settle_us: u32,
    /// Wait after idling the bus, before the first command
    pub power_on_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self::MINIMUM
    }
}

impl Timing {
    /// Shortest timing the controller accepts
    pub const MINIMUM: Timing = Timing {
        clock_hold_us: 1,
        bit_settle_us: 100,
        command_settle_us: 500,
        slow_command_settle_us: 2000,
        power_on_ms: 500,
    };

    /// Check every delay against `Timing::MINIMUM`
    ///
    /// Longer delays are accepted for slower controllers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = Self::MINIMUM;
        if self.clock_hold_us < min.clock_hold_us {
            return Err(ConfigError::ClockPulseTooShort);
        }
        if self.bit_settle_us < min.bit_settle_us {
            return Err(ConfigError::SettleTooShort);
        }
        if self.command_settle_us < min.command_settle_us {
            return Err(ConfigError::CommandSettleTooShort);
        }
        if self.slow_command_settle_us < min.slow_command_settle_us {
            return Err(ConfigError::SlowCommandSettleTooShort);
        }
        if self.power_on_ms < min.power_on_ms {
            return Err(ConfigError::PowerOnTooShort);
        }
        Ok(())
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Link pins
    pub pins: PinAssignment,
    /// Protocol timing
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: Timing,
    /// Character table selected during setup
    #[cfg_attr(feature = "serde", serde(default))]
    pub character_table: CharacterTable,
    /// Entry mode selected during setup
    #[cfg_attr(feature = "serde", serde(default))]
    pub entry_mode: EntryMode,
}

impl DisplayConfig {
    /// Create a config with default timing and setup values
    pub fn new(pins: PinAssignment) -> Self {
        Self {
            pins,
            timing: Timing::default(),
            character_table: CharacterTable::default(),
            entry_mode: EntryMode::default(),
        }
    }

    /// Validate pins and timing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pins.is_distinct() {
            return Err(ConfigError::DuplicatePin);
        }
        self.timing.validate()
    }
}
