use crate::RatioOutOfRange;

/// A fixed point approximation of a rational scale factor, usable on hardware
/// without floating point division: `value ≈ raw * mult >> shift`.
///
/// The multiplier never exceeds 0x7FFF so that multiplying it with a signed
/// 16 bit raw code always fits a 32 bit accumulator, and trailing factors of
/// two are stripped so two callers asking for the same ratio always get the
/// exact same coefficient.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficient
{
    pub mult: u16,
    pub shift: u8,
}

impl Coefficient {

    /// The identity coefficient, i.e. `raw * 1 >> 0`.
    pub const UNIT: Coefficient = Coefficient { mult: 1, shift: 0 };

    /// Calculates the best approximation of `raw * numerator / denominator`
    /// of the form `raw * mult >> shift`, where raw is a signed or unsigned
    /// 16 bit register code.
    ///
    /// The search keeps the largest shift whose rounded multiplier still fits
    /// in 15 bits, so precision is maximized for a given ratio. Products used
    /// by callers can reach the product of three board parameters, hence the
    /// 64 bit numerator and denominator.
    ///
    pub fn approximate(numerator: u64, denominator: u64) -> Result<Self, RatioOutOfRange> {
        let k = (numerator as f32) / (denominator as f32);

        let mut mult: u16 = 0;
        let mut shift: u8 = 0;
        let mut fits = false;
        for shift_candidate in 0u8..32 {
            let mult_candidate = libm::roundf(k * ((1u32 << shift_candidate) as f32)) as u32;
            if mult_candidate > 0x7FFF { break; }
            mult = mult_candidate as u16;
            shift = shift_candidate;
            fits = true;
        }
        if !fits {
            return Err(RatioOutOfRange { numerator, denominator });
        }

        // Strip trailing powers of two so the representation is canonical.
        while (mult & 1) == 0 && shift > 0 {
            mult >>= 1;
            shift -= 1;
        }

        Ok(Coefficient { mult, shift })
    }

    /// Applies this coefficient to a signed raw register code.
    ///
    /// The shift is arithmetic (the i32 intermediate preserves the sign), and
    /// `extra_shift` is the fixed per-channel post scale some registers need
    /// on top of the coefficient itself.
    ///
    pub fn convert_signed(&self, raw: i16, extra_shift: u8) -> i32 {
        (raw as i32) * (self.mult as i32) >> self.shift >> extra_shift
    }

    /// Applies this coefficient to an unsigned raw register code.
    ///
    pub fn convert_unsigned(&self, raw: u16, extra_shift: u8) -> i32 {
        (raw as i32) * (self.mult as i32) >> self.shift >> extra_shift
    }
}
