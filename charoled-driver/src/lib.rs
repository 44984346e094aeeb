//! 3-wire serial driver for character OLED displays
//!
//! Drives Winstar/NewHaven style character OLEDs (16x2, 20x4) in their
//! serial mode, using three software-clocked lines: clock, data and an
//! active-low chip select.
//!
//! - [`link`] - bit-level transmitter and command/data framing
//! - [`frame`] - pure view of the bits a transaction puts on the wire
//! - [`registers`] - the display control register mirror
//! - [`address`] - (column, row) to DDRAM address mapping
//! - [`display`] - the [`CharOled`] driver and its setup sequence
//! - [`print`] - byte sink and text/number printing helpers
//! - [`config`] - pin and timing configuration
//!
//! ```ignore
//! let mut oled = CharOled::new(PinAssignment::new(13, 11, 10), pins, delay);
//! oled.setup();
//! oled.set_cursor(0, 1);
//! print_str(&mut oled, "hello");
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod address;
pub mod cmd;
pub mod config;
pub mod display;
pub mod frame;
pub mod link;
pub mod print;
pub mod registers;

#[cfg(test)]
mod mock;

pub use charoled_hal as hal;
pub use charoled_hal::{Level, PinAssignment, PinBank, PinControl, PinId};
pub use cmd::{CharacterTable, EntryMode};
pub use config::{ConfigError, DisplayConfig, Timing};
pub use display::{CharOled, DriverState};
pub use frame::TransactionMode;
pub use print::{print_number, print_signed, print_str, ByteSink, Printer, Radix};
pub use registers::DisplayControl;
