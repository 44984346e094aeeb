//! Software-clocked serial link
//!
//! Bit-banged 3-wire bus: the data line is set before each clock pulse and
//! latched by the display on the rising edge. Chip select (active low)
//! brackets one transaction.
//!
//! Clock cycle per bit:
//!
//! ```text
//!          ┌────┐
//! CLK ─────┘    └──────────────── ...
//!      1µs  1µs       100µs
//! ```
//!
//! A transaction must run to completion once select goes low. Stopping
//! mid-byte leaves the display out of sync until it is set up again.

use charoled_hal::{Level, PinAssignment, PinControl};
use embedded_hal::delay::DelayNs;

use crate::config::Timing;
use crate::frame::{bits_msb_first, preamble, TransactionMode};

/// Transmitter and framer for one display
pub struct SerialLink<P, D> {
    pins: PinAssignment,
    control: P,
    delay: D,
    timing: Timing,
}

impl<P: PinControl, D: DelayNs> SerialLink<P, D> {
    /// Create a link over the given pins
    ///
    /// Nothing is written until [`SerialLink::idle_bus`] is called.
    pub fn new(pins: PinAssignment, control: P, delay: D, timing: Timing) -> Self {
        Self {
            pins,
            control,
            delay,
            timing,
        }
    }

    /// Pin assignment
    pub fn pins(&self) -> PinAssignment {
        self.pins
    }

    /// Protocol timing
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Configure all three lines as outputs and park the bus
    ///
    /// Idle state: select high, clock high, data low.
    pub fn idle_bus(&mut self) {
        self.control.set_output_mode(self.pins.select);
        self.control.set_output_mode(self.pins.clock);
        self.control.set_output_mode(self.pins.data);

        self.control.set_high(self.pins.select);
        self.control.set_high(self.pins.clock);
        self.control.set_low(self.pins.data);
    }

    /// One clock cycle: low, high, low, then settle
    fn pulse_clock(&mut self) {
        let hold = self.timing.clock_hold_us;

        self.control.set_low(self.pins.clock);
        self.delay.delay_us(hold);
        self.control.set_high(self.pins.clock);
        self.delay.delay_us(hold);
        self.control.set_low(self.pins.clock);
        self.delay.delay_us(self.timing.bit_settle_us);
    }

    /// Put one bit on the data line and clock it in
    fn clock_bit(&mut self, bit: bool) {
        self.control.set_level(self.pins.data, Level::from(bit));
        self.pulse_clock();
    }

    /// Shift a byte out, most significant bit first
    pub fn shift_byte(&mut self, value: u8) {
        for bit in bits_msb_first(value) {
            self.clock_bit(bit);
        }
    }

    /// Send one framed byte
    pub fn send(&mut self, value: u8, mode: TransactionMode) {
        self.control.set_low(self.pins.select);

        for bit in preamble(mode) {
            self.clock_bit(bit);
        }
        self.shift_byte(value);

        self.control.set_high(self.pins.select);
    }

    /// Send an instruction byte
    pub fn command(&mut self, value: u8) {
        self.send(value, TransactionMode::Command);
    }

    /// Busy-wait in microseconds
    pub fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    /// Busy-wait in milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the pin control and delay provider
    pub fn release(self) -> (P, D) {
        (self.control, self.delay)
    }
}
