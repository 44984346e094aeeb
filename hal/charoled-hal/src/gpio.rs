//! GPIO pin abstractions
//!
//! The display link only ever needs two primitives from the host: switch a
//! pin to output mode, and drive an output pin to a level. [`PinControl`]
//! exposes exactly those, addressed by [`PinId`].

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board-level pin identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(pin: u8) -> Self {
        Self(pin)
    }
}

/// Logic level of an output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// Pin-level output primitive
///
/// Implementations must apply each call before returning. Writes are
/// infallible: the display protocol has no way to report or recover from a
/// failed pin write.
pub trait PinControl {
    /// Configure a pin as a push-pull output
    fn set_output_mode(&mut self, pin: PinId);

    /// Drive an output pin to the given level
    fn set_level(&mut self, pin: PinId, level: Level);

    /// Drive a pin high
    fn set_high(&mut self, pin: PinId) {
        self.set_level(pin, Level::High);
    }

    /// Drive a pin low
    fn set_low(&mut self, pin: PinId) {
        self.set_level(pin, Level::Low);
    }
}

impl<T: PinControl + ?Sized> PinControl for &mut T {
    fn set_output_mode(&mut self, pin: PinId) {
        (**self).set_output_mode(pin);
    }

    fn set_level(&mut self, pin: PinId, level: Level) {
        (**self).set_level(pin, level);
    }
}

/// The three lines of the serial display link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Serial clock (SCL / SCK)
    pub clock: PinId,
    /// Serial data in (SDI / MOSI)
    pub data: PinId,
    /// Chip select (CS / SS), active low
    pub select: PinId,
}

impl PinAssignment {
    /// Create a pin assignment from raw pin numbers
    pub const fn new(clock: u8, data: u8, select: u8) -> Self {
        Self {
            clock: PinId(clock),
            data: PinId(data),
            select: PinId(select),
        }
    }

    /// Check that no two lines share a pin
    pub fn is_distinct(&self) -> bool {
        self.clock != self.data && self.clock != self.select && self.data != self.select
    }
}

/// [`PinControl`] over three `embedded-hal` output pins
///
/// The pins are already outputs by type, so `set_output_mode` only has to
/// accept the call. Levels for ids outside the assignment are ignored.
pub struct PinBank<CLK, DAT, SEL> {
    assignment: PinAssignment,
    clock: CLK,
    data: DAT,
    select: SEL,
}

impl<CLK, DAT, SEL> PinBank<CLK, DAT, SEL>
where
    CLK: OutputPin<Error = Infallible>,
    DAT: OutputPin<Error = Infallible>,
    SEL: OutputPin<Error = Infallible>,
{
    /// Bind three output pins to the ids in `assignment`
    pub fn new(assignment: PinAssignment, clock: CLK, data: DAT, select: SEL) -> Self {
        Self {
            assignment,
            clock,
            data,
            select,
        }
    }

    /// The ids this bank answers to
    pub fn assignment(&self) -> PinAssignment {
        self.assignment
    }

    /// Give the pins back
    pub fn release(self) -> (CLK, DAT, SEL) {
        (self.clock, self.data, self.select)
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, level: Level) {
    match pin.set_state(level.into()) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<CLK, DAT, SEL> PinControl for PinBank<CLK, DAT, SEL>
where
    CLK: OutputPin<Error = Infallible>,
    DAT: OutputPin<Error = Infallible>,
    SEL: OutputPin<Error = Infallible>,
{
    fn set_output_mode(&mut self, _pin: PinId) {}

    fn set_level(&mut self, pin: PinId, level: Level) {
        if pin == self.assignment.clock {
            drive(&mut self.clock, level);
        } else if pin == self.assignment.data {
            drive(&mut self.data, level);
        } else if pin == self.assignment.select {
            drive(&mut self.select, level);
        }
    }
}
