//! Recording bus for tests
//!
//! Pin writes and delays go into one ordered log so tests can check both the
//! bits on the wire and the timing between them.

use core::cell::RefCell;

use charoled_hal::{Level, PinAssignment, PinControl, PinId};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::frame::{decode_frame, TransactionMode, FRAME_BITS};

pub const PINS: PinAssignment = PinAssignment::new(13, 11, 10);

const LOG_CAPACITY: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    OutputMode(PinId),
    Level(PinId, Level),
    /// Requested delay in nanoseconds
    Delay(u32),
}

/// One select-low .. select-high window
#[derive(Debug, Clone)]
pub struct Transaction {
    pub bits: Vec<bool, 16>,
    /// Event index of select high
    pub end: usize,
}

impl Transaction {
    pub fn decode(&self) -> Option<(u8, TransactionMode)> {
        let bits: [bool; FRAME_BITS] = self.bits.as_slice().try_into().ok()?;
        decode_frame(&bits)
    }
}

pub struct BusLog {
    events: Vec<BusEvent, LOG_CAPACITY>,
}

impl BusLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    fn push(&mut self, event: BusEvent) {
        self.events.push(event).expect("bus log full");
    }

    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    pub fn delays(&self) -> Vec<u32, LOG_CAPACITY> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Delay(ns) => Some(*ns),
                _ => None,
            })
            .collect()
    }

    /// Data line level at every rising clock edge
    pub fn latched_bits(&self) -> Vec<bool, 512> {
        let mut bits = Vec::new();
        self.walk(|bit| {
            bits.push(bit).expect("too many bits");
        });
        bits
    }

    pub fn transactions(&self) -> Vec<Transaction, 32> {
        let mut out: Vec<Transaction, 32> = Vec::new();
        let mut current: Option<Vec<bool, 16>> = None;
        let mut clock = None;
        let mut data = Level::Low;

        for (index, event) in self.events.iter().enumerate() {
            let BusEvent::Level(pin, level) = *event else {
                continue;
            };
            if pin == PINS.select {
                match level {
                    Level::Low => current = Some(Vec::new()),
                    Level::High => {
                        if let Some(bits) = current.take() {
                            out.push(Transaction { bits, end: index })
                                .expect("too many transactions");
                        }
                    }
                }
            } else if pin == PINS.data {
                data = level;
            } else if pin == PINS.clock {
                if clock == Some(Level::Low) && level == Level::High {
                    if let Some(bits) = current.as_mut() {
                        bits.push(data.is_high()).expect("transaction too long");
                    }
                }
                clock = Some(level);
            }
        }
        out
    }

    /// Decoded (value, mode) of every transaction, in order
    pub fn frames(&self) -> Vec<(u8, TransactionMode), 32> {
        self.transactions()
            .iter()
            .map(|t| t.decode().expect("malformed transaction"))
            .collect()
    }

    pub fn commands(&self) -> Vec<u8, 32> {
        self.frames()
            .iter()
            .filter(|(_, mode)| *mode == TransactionMode::Command)
            .map(|(value, _)| *value)
            .collect()
    }

    /// Total delay between the end of transaction `n` and the next select low
    pub fn delay_after_transaction(&self, n: usize) -> u32 {
        let end = self.transactions()[n].end;
        let mut total = 0;
        for event in &self.events[end + 1..] {
            match *event {
                BusEvent::Delay(ns) => total += ns,
                BusEvent::Level(pin, Level::Low) if pin == PINS.select => break,
                _ => {}
            }
        }
        total
    }

    fn walk(&self, mut on_edge: impl FnMut(bool)) {
        let mut clock = None;
        let mut data = Level::Low;
        for event in self.events.iter() {
            match *event {
                BusEvent::Level(pin, level) if pin == PINS.data => data = level,
                BusEvent::Level(pin, level) if pin == PINS.clock => {
                    if clock == Some(Level::Low) && level == Level::High {
                        on_edge(data.is_high());
                    }
                    clock = Some(level);
                }
                _ => {}
            }
        }
    }
}

pub struct MockPins<'a> {
    log: &'a RefCell<BusLog>,
}

impl<'a> MockPins<'a> {
    pub fn new(log: &'a RefCell<BusLog>) -> Self {
        Self { log }
    }
}

impl PinControl for MockPins<'_> {
    fn set_output_mode(&mut self, pin: PinId) {
        self.log.borrow_mut().push(BusEvent::OutputMode(pin));
    }

    fn set_level(&mut self, pin: PinId, level: Level) {
        self.log.borrow_mut().push(BusEvent::Level(pin, level));
    }
}

pub struct MockDelay<'a> {
    log: &'a RefCell<BusLog>,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a RefCell<BusLog>) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(BusEvent::Delay(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms * 1_000_000);
    }
}
