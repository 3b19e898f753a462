
/// Errors that can come out of driver operations, generic over whatever error
/// type the underlying register bus reports.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The bus reported a communication failure (e.g. a NACK from the chip).
    Bus(E),

    /// The bus returned fewer than the four bytes that make up a register.
    ShortRead,

    /// A requested scale ratio cannot be represented as a coefficient.
    Ratio(RatioOutOfRange),
}

/// Returned when a scale ratio is too large to be approximated by any 15 bit
/// multiplier at any shift, i.e. the ratio exceeds 0x7FFF even at shift zero.
///
/// Silently clamping would produce plausible-looking but wrong physical
/// readings, so this is surfaced at configuration time instead.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioOutOfRange {
    pub numerator: u64,
    pub denominator: u64,
}

impl<E> From<RatioOutOfRange> for Error<E> {
    fn from(err: RatioOutOfRange) -> Self {
        Error::Ratio(err)
    }
}
