use crate::registers::*;
use crate::{CalibrationSet, Error, InstMeasurement, PololuRsense, PowerMeasurement,
    RegisterBus, RmsMeasurement};

/// The RMS registers (and the apparent power register derived from them)
/// encode their magnitude at twice the scale of the instantaneous registers
/// sharing the same coefficient, so their conversions take one extra shift.
const RMS_EXTRA_SHIFT: u8 = 1;

/// Driver for the ACS37800 power monitoring IC.
///
/// Generic over a [`RegisterBus`] so the same conversion logic runs against a
/// real i2c peripheral or a mock transport. The driver holds the calibration
/// coefficients for the attached board; every read returns the converted
/// value directly instead of caching it.
///
pub struct Acs37800<B>
{
    /// Register bus that we actually use to communicate with the chip.
    pub bus: B,

    calibration: CalibrationSet,
}

impl<B: RegisterBus> Acs37800<B>
{
    /// Create a new ACS37800 instance on the given register bus, with the
    /// identity calibration. Call `set_board_pololu` or
    /// `set_board_parameters` before reading to get physical units.
    ///
    pub fn new(bus: B) -> Self {
        Acs37800 {
            bus,
            calibration: CalibrationSet::unit(),
        }
    }

    /// Create a new ACS37800 instance with an already computed calibration.
    ///
    pub fn with_calibration(bus: B, calibration: CalibrationSet) -> Self {
        Acs37800 { bus, calibration }
    }

    pub fn calibration(&self) -> CalibrationSet {
        self.calibration
    }

    pub fn set_calibration(&mut self, calibration: CalibrationSet) {
        self.calibration = calibration;
    }

    /// Configures this driver to use the right conversion coefficients for a
    /// Pololu ACS37800 isolated power monitor carrier board.
    ///
    pub fn set_board_pololu(&mut self, rsense_kohm: PololuRsense) {
        self.calibration = CalibrationSet::pololu(rsense_kohm);
    }

    /// Configures this driver to use the right conversion coefficients for a
    /// generic board, see `CalibrationSet::from_board_parameters` for what
    /// the parameters mean.
    ///
    pub fn set_board_parameters(
        &mut self,
        isense_range_amps: u8,
        riso_ohms: u32,
        rsense_ohms: u32,
    ) -> Result<(), Error<B::BusError>> {
        let calibration =
            CalibrationSet::from_board_parameters(isense_range_amps, riso_ohms, rsense_ohms)?;
        log::info!(
            "Board parameters isense={}A riso={} rsense={}: {:?}",
            isense_range_amps, riso_ohms, rsense_ohms, calibration
        );
        self.calibration = calibration;
        Ok(())
    }

    /// Writes the special access code to the chip to unlock it, which is a
    /// prerequisite for most other register writes. Users should not normally
    /// need to call this directly, the functions that need it call it
    /// themselves.
    ///
    pub fn enable_write_access(&mut self) -> Result<(), Error<B::BusError>> {
        self.bus.write_reg(ACCESS_CODE, ACCESS_CODE_VALUE)
    }

    /// Configures the chip to use the specified number of samples for RMS and
    /// power calculations. Samples are taken at 32 kHz.
    ///
    /// Counts above 1023 are clamped to 1023, and 1 to 3 are treated the same
    /// as 4 by the chip. A count of 0 means to take samples from one voltage
    /// zero crossing to the next instead of a fixed number of samples.
    ///
    /// This only touches the shadow registers, not EEPROM, so the setting is
    /// not stored permanently.
    ///
    pub fn set_sample_count(&mut self, count: u16) -> Result<(), Error<B::BusError>> {
        self.enable_write_access()?;

        let mut reg = self.bus.read_reg(SHADOW_1F)?;

        let count = if count > 1023 { 1023 } else { count };
        log::debug!("Setting sample count={}", count);

        // Clear N and BYPASS_N_EN, then set them if necessary.
        reg &= 0xFE00_3FFF;
        if count != 0 {
            reg |= (1 << 24) | ((count as u32) << 14);
        }

        self.bus.write_reg(SHADOW_1F, reg)
    }

    /// Reads the root mean square (RMS) voltage and current measurements
    /// from the chip and converts them to mV and mA respectively.
    ///
    pub fn read_rms_voltage_and_current(&mut self) -> Result<RmsMeasurement, Error<B::BusError>> {
        let reg = self.bus.read_reg(VRMS_IRMS)?;
        let vrms = reg as u16;
        let irms = (reg >> 16) as u16;
        Ok(RmsMeasurement {
            voltage_millivolts: self.calibration.vcodes.convert_unsigned(vrms, RMS_EXTRA_SHIFT),
            current_milliamps: self.calibration.icodes.convert_unsigned(irms, RMS_EXTRA_SHIFT),
        })
    }

    /// Reads the active and reactive power from the chip and converts both
    /// to mW.
    ///
    pub fn read_active_and_reactive_power(&mut self) -> Result<PowerMeasurement, Error<B::BusError>> {
        let reg = self.bus.read_reg(PACTIVE_PIMAG)?;
        let pactive = reg as u16 as i16;
        let pimag = (reg >> 16) as u16 as i16;
        Ok(PowerMeasurement {
            active_milliwatts: self.calibration.pinstant.convert_signed(pactive, 0),
            reactive_milliwatts: self.calibration.pinstant.convert_signed(pimag, 0),
        })
    }

    /// Reads the apparent power from the chip and returns it in mW.
    ///
    pub fn read_apparent_power_milliwatts(&mut self) -> Result<i32, Error<B::BusError>> {
        let reg = self.bus.read_reg(PAPPARENT)?;
        let papparent = reg as u16;
        Ok(self.calibration.pinstant.convert_unsigned(papparent, RMS_EXTRA_SHIFT))
    }

    /// Reads the instantaneous voltage and current measurements from the
    /// chip (VCODES and ICODES) and converts them to mV and mA respectively.
    ///
    pub fn read_inst_voltage_and_current(&mut self) -> Result<InstMeasurement, Error<B::BusError>> {
        let reg = self.bus.read_reg(VCODES_ICODES)?;
        let vcodes = reg as u16 as i16;
        let icodes = (reg >> 16) as u16 as i16;
        Ok(InstMeasurement {
            voltage_millivolts: self.calibration.vcodes.convert_signed(vcodes, 0),
            current_milliamps: self.calibration.icodes.convert_signed(icodes, 0),
        })
    }

    /// Reads the instantaneous power measurement (PINSTANT) from the chip
    /// and returns its value converted to mW.
    ///
    pub fn read_inst_power_milliwatts(&mut self) -> Result<i32, Error<B::BusError>> {
        let reg = self.bus.read_reg(PINSTANT)?;
        let pinstant = reg as u16 as i16;
        Ok(self.calibration.pinstant.convert_signed(pinstant, 0))
    }

    /// Reads the RMS voltage measurement from the chip and returns its value
    /// converted to millivolts (mV).
    ///
    /// If you need both the current and the voltage it is more efficient to
    /// use `read_rms_voltage_and_current` instead, which gets both from the
    /// same register read.
    ///
    pub fn read_rms_voltage_millivolts(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_rms_voltage_and_current()?.voltage_millivolts)
    }

    /// Reads the RMS current measurement from the chip and returns its value
    /// converted to milliamps (mA).
    ///
    /// If you need both the current and the voltage it is more efficient to
    /// use `read_rms_voltage_and_current` instead.
    ///
    pub fn read_rms_current_milliamps(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_rms_voltage_and_current()?.current_milliamps)
    }

    /// Reads the active power from the chip and returns its value converted
    /// to milliwatts (mW).
    ///
    /// If you need the reactive power too it is more efficient to use
    /// `read_active_and_reactive_power` instead.
    ///
    pub fn read_active_power_milliwatts(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_active_and_reactive_power()?.active_milliwatts)
    }

    /// Reads the reactive (imaginary) power from the chip and returns its
    /// value converted to milliwatts (mW).
    ///
    /// If you need the active power too it is more efficient to use
    /// `read_active_and_reactive_power` instead.
    ///
    pub fn read_reactive_power_milliwatts(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_active_and_reactive_power()?.reactive_milliwatts)
    }

    /// Reads the instantaneous voltage measurement from the chip and returns
    /// its value converted to millivolts (mV).
    ///
    /// If you need both the current and the voltage it is more efficient to
    /// use `read_inst_voltage_and_current` instead.
    ///
    pub fn read_inst_voltage_millivolts(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_inst_voltage_and_current()?.voltage_millivolts)
    }

    /// Reads the instantaneous current measurement from the chip and returns
    /// its value converted to milliamps (mA).
    ///
    /// If you need both the current and the voltage it is more efficient to
    /// use `read_inst_voltage_and_current` instead.
    ///
    pub fn read_inst_current_milliamps(&mut self) -> Result<i32, Error<B::BusError>> {
        Ok(self.read_inst_voltage_and_current()?.current_milliamps)
    }

    /// Sets the 7 bit i2c device address of the chip by writing it to EEPROM.
    ///
    /// The new address does not take effect until the chip is power cycled.
    /// After this function returns the chip takes about 25 ms to write to
    /// EEPROM, and communication during that time will not succeed (register
    /// reads return 0).
    ///
    pub fn write_eeprom_i2c_address(&mut self, address: u8) -> Result<(), Error<B::BusError>> {
        log::info!("Writing i2c address={:#04x} to EEPROM", address);
        self.enable_write_access()?;
        let reg = self.bus.read_reg(EEPROM_0F)?;
        let reg = (reg & !0x3FC) | (1 << 9) | (((address & 0x7F) as u32) << 2);
        self.bus.write_reg(EEPROM_0F, reg)
    }

    /// Reads a sensor register and returns its value, for registers the
    /// typed methods above do not cover.
    ///
    pub fn read_reg(&mut self, reg: u8) -> Result<u32, Error<B::BusError>> {
        self.bus.read_reg(reg)
    }

    /// Writes to a sensor register. Most registers require
    /// `enable_write_access` to have been called first.
    ///
    pub fn write_reg(&mut self, reg: u8, value: u32) -> Result<(), Error<B::BusError>> {
        self.bus.write_reg(reg, value)
    }
}
