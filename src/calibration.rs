use crate::{Coefficient, RatioOutOfRange};

/// Rsense jumper setting of a Pololu ACS37800 carrier board, in kilohms.
/// See the "Voltage measurement ranges" section of the board's product page
/// to determine which value your jumpers select.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PololuRsense
{
    K1 = 1,
    K2 = 2,
    K4 = 4,
}

/// The set of conversion coefficients for one particular board, one per
/// measured channel family. All power registers (instantaneous, active,
/// reactive, apparent) share the `pinstant` coefficient.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationSet
{
    pub vcodes: Coefficient,
    pub icodes: Coefficient,
    pub pinstant: Coefficient,
}

impl CalibrationSet {

    /// Identity calibration, i.e. conversions return the raw register codes
    /// unscaled. This is the state of a freshly created driver before a board
    /// is configured.
    ///
    pub const fn unit() -> Self {
        CalibrationSet {
            vcodes: Coefficient::UNIT,
            icodes: Coefficient::UNIT,
            pinstant: Coefficient::UNIT,
        }
    }

    /// Calibration for a Pololu ACS37800 isolated power monitor carrier
    /// board with the given Rsense jumper setting.
    ///
    /// These are precomputed from the board's 4 MOhm Riso divider and the
    /// 30 A current sensing range of the IC the board carries; using this
    /// instead of `from_board_parameters` avoids pulling in the float
    /// approximation code.
    ///
    pub const fn pololu(rsense_kohm: PololuRsense) -> Self {
        let (vcodes, pinstant) = match rsense_kohm {
            PololuRsense::K1 => (
                Coefficient { mult: 18623, shift: 9 },
                Coefficient { mult: 1299, shift: 0 },
            ),
            PololuRsense::K2 => (
                Coefficient { mult: 18627, shift: 10 },
                Coefficient { mult: 10395, shift: 4 },
            ),
            PololuRsense::K4 => (
                Coefficient { mult: 18637, shift: 11 },
                Coefficient { mult: 325, shift: 0 },
            ),
        };
        CalibrationSet {
            vcodes,
            icodes: Coefficient { mult: 17873, shift: 14 },
            pinstant,
        }
    }

    /// Calibration for a generic board.
    ///
    /// The `isense_range_amps` parameter is the current sensing range of the
    /// ACS37800 IC in amps, which depends on the specific part number and is
    /// specified in the datasheet (typically 15, 30, or 90).
    ///
    /// The `riso_ohms` parameter is the resistance between the VINN pin and
    /// the negative voltage sensing terminal of the board, plus the
    /// resistance between the VINP pin and the positive sensing terminal.
    ///
    /// The `rsense_ohms` parameter is the resistance between the voltage
    /// sensing pins VINN and VINP.
    ///
    pub fn from_board_parameters(
        isense_range_amps: u8,
        riso_ohms: u32,
        rsense_ohms: u32,
    ) -> Result<Self, RatioOutOfRange> {
        let isense = isense_range_amps as u64;
        let riso = riso_ohms as u64;
        let rsense = rsense_ohms as u64;
        Ok(CalibrationSet {
            vcodes: Coefficient::approximate(riso + rsense, 110 * rsense)?,
            icodes: Coefficient::approximate(2 * isense, 55)?,
            pinstant: Coefficient::approximate(isense * (riso + rsense) * 5, rsense * 462)?,
        })
    }
}

impl Default for CalibrationSet {
    fn default() -> Self {
        CalibrationSet::unit()
    }
}
