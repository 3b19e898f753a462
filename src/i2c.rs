use hal::i2c::{Error as I2cError, Instance, I2C};

use crate::{Error, RegisterBus, ACS37800_DEFAULT_I2C_ADDR};

/// Register bus implementation for an ACS37800 attached to one of the
/// esp32's i2c peripherals.
///
/// Registers are 4 bytes in little endian order on the wire: a read is a
/// write of the register pointer followed by a 4 byte read, a write is the
/// register pointer and the 4 value bytes in a single transmission.
///
pub struct I2cBus<'a, T: Instance>
{
    /// i2c channel that we actually use to communicate with the chip.
    pub i2c: I2C<'a, T>,

    /// i2c address that the chip is located at.
    address: u8,
}

impl<'a, T: Instance> I2cBus<'a, T>
{
    /// Create a new register bus on the given i2c interface, using the
    /// default ACS37800 address.
    ///
    pub fn new(i2c: I2C<'a, T>) -> Self {
        I2cBus {
            i2c,
            address: ACS37800_DEFAULT_I2C_ADDR,
        }
    }

    /// Create a new register bus on the given i2c interface and 7 bit
    /// address. The address must match what the chip is configured to use,
    /// which is a function of its EEPROM settings and its DIO_0 and DIO_1
    /// connections.
    ///
    pub fn with_address(i2c: I2C<'a, T>, address: u8) -> Self {
        I2cBus { i2c, address }
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

impl<'a, T: Instance> RegisterBus for I2cBus<'a, T>
{
    type BusError = I2cError;

    fn read_reg(&mut self, reg: u8) -> Result<u32, Error<I2cError>> {
        let mut data = [0u8; 4];
        self.i2c.write_read(self.address, &[reg], &mut data).map_err(Error::Bus)?;
        Ok(u32::from_le_bytes(data))
    }

    fn write_reg(&mut self, reg: u8, value: u32) -> Result<(), Error<I2cError>> {
        let v = value.to_le_bytes();
        self.i2c.write(self.address, &[reg, v[0], v[1], v[2], v[3]]).map_err(Error::Bus)
    }
}
