//! charoled Hardware Abstraction Layer
//!
//! This crate defines the pin-control capability the display driver talks
//! through. Boards either implement [`gpio::PinControl`] directly or wrap
//! three `embedded-hal` output pins in a [`gpio::PinBank`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  charoled-driver (protocol + registers) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charoled-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   PinBank     │       │  test mocks / │
//! │ (embedded-hal)│       │  custom ports │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! Delays are not abstracted here: the driver takes any
//! [`embedded_hal::delay::DelayNs`] implementation.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{Level, PinAssignment, PinBank, PinControl, PinId};
