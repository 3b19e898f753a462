#![cfg_attr(not(test), no_std)]

pub mod coefficient;
pub use coefficient::*;

pub mod calibration;
pub use calibration::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod bus;
pub use bus::*;

pub mod registers;

#[cfg(feature = "hal")]
pub mod i2c;
#[cfg(feature = "hal")]
pub use i2c::*;

pub mod acs37800;
pub use acs37800::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the ACS37800 chip. The actual address is a function
/// of the chip's EEPROM settings and its DIO_0 and DIO_1 connections.
///
pub const ACS37800_DEFAULT_I2C_ADDR: u8 = 0x60;
