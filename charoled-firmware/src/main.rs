//! charoled demo firmware
//!
//! Drives a 16x2 character OLED in serial mode from an RP2040:
//! - GPIO18: SCL (clock)
//! - GPIO19: SDI (data)
//! - GPIO17: CS (select)
//!
//! Prints a banner on the first row and an uptime counter on the second.

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use charoled_driver::{print_str, CharOled, DisplayConfig, PinAssignment, PinBank, Printer};

/// Link pins, numbered as on the board
const PINS: PinAssignment = PinAssignment::new(18, 19, 17);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("charoled demo starting...");

    let p = embassy_rp::init(Default::default());

    // Idle levels; setup() drives them again before the first command
    let clock = Output::new(p.PIN_18, Level::High);
    let data = Output::new(p.PIN_19, Level::Low);
    let select = Output::new(p.PIN_17, Level::High);
    let bank = PinBank::new(PINS, clock, data, select);

    let config = DisplayConfig::new(PINS);
    let mut oled = match CharOled::from_config(&config, bank, Delay) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Invalid display config: {:?}", e);
            return;
        }
    };

    oled.setup();
    info!("OLED initialized");

    print_str(&mut oled, "charoled");
    oled.cursor_off();

    let mut seconds: u32 = 0;
    loop {
        oled.set_cursor(0, 1);
        let mut printer = Printer::new(&mut oled);
        let _ = write!(printer, "up {:>6}s", seconds);
        trace!("Display updated");

        seconds = seconds.wrapping_add(1);
        Timer::after_secs(1).await;
    }
}
