use crate::Error;

/// Abstraction over the transport used to reach the chip's 32 bit registers.
///
/// The ACS37800 exposes every register as 4 bytes in little endian order; how
/// those bytes actually move (which i2c peripheral, retries, timeouts) is the
/// implementor's concern. A transport that receives fewer than 4 bytes on a
/// read must report `Error::ShortRead` rather than padding the value.
///
pub trait RegisterBus
{
    /// Error type the underlying transport reports on communication failures.
    type BusError;

    /// Reads a sensor register and returns its value.
    fn read_reg(&mut self, reg: u8) -> Result<u32, Error<Self::BusError>>;

    /// Writes to a sensor register.
    fn write_reg(&mut self, reg: u8, value: u32) -> Result<(), Error<Self::BusError>>;
}
