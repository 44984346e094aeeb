//! Character OLED driver
//!
//! [`CharOled`] owns the serial link and the display control register
//! mirror. All operations are blocking: each one returns only after the
//! display's settle time has elapsed.
//!
//! # Setup sequence
//!
//! 1. Configure select, clock and data as outputs
//! 2. Idle the bus: select high, clock high, data low
//! 3. Wait for power to stabilize (500ms)
//! 4. Function set (character table)
//! 5. Display on
//! 6. Clear
//! 7. Home
//! 8. Entry mode (increment, no shift)
//!
//! Operations called before [`CharOled::setup`] are sent anyway; the
//! display will most likely ignore them.

use charoled_hal::{PinAssignment, PinControl};
use embedded_hal::delay::DelayNs;

use crate::address::cursor_address;
use crate::cmd::{op, CharacterTable, EntryMode};
use crate::config::{ConfigError, DisplayConfig, Timing};
use crate::frame::TransactionMode;
use crate::link::SerialLink;
use crate::print::ByteSink;
use crate::registers::DisplayControl;

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, pins untouched
    Uninitialized,
    /// Setup sequence in progress
    Initializing,
    /// Accepting operations
    Ready,
}

/// 3-wire character OLED
pub struct CharOled<P, D> {
    link: SerialLink<P, D>,
    control: DisplayControl,
    character_table: CharacterTable,
    entry_mode: EntryMode,
    state: DriverState,
}

impl<P: PinControl, D: DelayNs> CharOled<P, D> {
    /// Create a driver with default timing
    ///
    /// No pin is touched until [`CharOled::setup`].
    pub fn new(pins: PinAssignment, control: P, delay: D) -> Self {
        Self::with_timing(pins, control, delay, Timing::default())
    }

    fn with_timing(pins: PinAssignment, control: P, delay: D, timing: Timing) -> Self {
        Self {
            link: SerialLink::new(pins, control, delay, timing),
            control: DisplayControl::default(),
            character_table: CharacterTable::default(),
            entry_mode: EntryMode::default(),
            state: DriverState::Uninitialized,
        }
    }

    /// Create a driver from a validated config
    pub fn from_config(config: &DisplayConfig, control: P, delay: D) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut oled = Self::with_timing(config.pins, control, delay, config.timing);
        oled.character_table = config.character_table;
        oled.entry_mode = config.entry_mode;
        Ok(oled)
    }

    /// Bring the display from power-on to ready
    pub fn setup(&mut self) {
        self.state = DriverState::Initializing;
        #[cfg(feature = "defmt")]
        defmt::debug!("charoled: setup on {}", self.link.pins());

        self.link.idle_bus();
        let power_on_ms = self.link.timing().power_on_ms;
        self.link.delay_ms(power_on_ms);

        self.set_function_set(self.character_table);
        self.display_on();
        self.clear();
        self.home();
        self.set_entry_mode(self.entry_mode);

        self.state = DriverState::Ready;
        #[cfg(feature = "defmt")]
        defmt::debug!("charoled: ready");
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Mirrored display control register
    pub fn display_control(&self) -> DisplayControl {
        self.control
    }

    /// Pin assignment
    pub fn pins(&self) -> PinAssignment {
        self.link.pins()
    }

    /// Clear all characters and return the cursor to the origin
    pub fn clear(&mut self) {
        self.slow_command(op::CLEAR_DISPLAY);
    }

    /// Return the cursor to the origin and undo any display shift
    pub fn home(&mut self) {
        self.slow_command(op::RETURN_HOME);
    }

    /// Turn the display on
    pub fn display_on(&mut self) {
        self.control.display = true;
        self.push_control();
    }

    /// Blank the display, keeping DDRAM
    pub fn display_off(&mut self) {
        self.control.display = false;
        self.push_control();
    }

    /// Show the underline cursor
    pub fn cursor_on(&mut self) {
        self.control.cursor = true;
        self.push_control();
    }

    /// Hide the underline cursor
    pub fn cursor_off(&mut self) {
        self.control.cursor = false;
        self.push_control();
    }

    /// Blink the cursor cell
    pub fn blink_on(&mut self) {
        self.control.blink = true;
        self.push_control();
    }

    /// Stop blinking the cursor cell
    pub fn blink_off(&mut self) {
        self.control.blink = false;
        self.push_control();
    }

    /// Move the cursor to a zero-based (column, row)
    ///
    /// Rows above 4 land on row 3. The column is sent as is.
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        #[cfg(feature = "defmt")]
        {
            let clamped = crate::address::clamp_row(row);
            if clamped != row {
                defmt::warn!("charoled: row {} clamped to {}", row, clamped);
            }
        }

        self.link.command(op::SET_DDRAM_ADDR | cursor_address(col, row));
    }

    /// Entry mode set; flags are sent verbatim
    pub fn set_entry_mode<F: Into<u8>>(&mut self, flags: F) {
        self.fast_command(op::ENTRY_MODE | flags.into());
    }

    /// Function set; flags are sent verbatim
    pub fn set_function_set<F: Into<u8>>(&mut self, flags: F) {
        self.fast_command(op::FUNCTION_SET | flags.into());
    }

    /// Write one character code at the cursor
    ///
    /// The display advances the cursor itself. Always returns 1.
    pub fn write(&mut self, character: u8) -> usize {
        self.link.send(character, TransactionMode::Data);
        1
    }

    /// Give back the pin control and delay provider
    pub fn release(self) -> (P, D) {
        self.link.release()
    }

    fn push_control(&mut self) {
        self.fast_command(self.control.command());
    }

    fn fast_command(&mut self, value: u8) {
        self.link.command(value);
        let settle = self.link.timing().command_settle_us;
        self.link.delay_us(settle);
    }

    fn slow_command(&mut self, value: u8) {
        self.link.command(value);
        let settle = self.link.timing().slow_command_settle_us;
        self.link.delay_us(settle);
    }
}

impl<P: PinControl, D: DelayNs> ByteSink for CharOled<P, D> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write(byte)
    }
}
