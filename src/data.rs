
/// Root mean square voltage and current, read jointly from the VRMS_IRMS
/// register.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmsMeasurement
{
    pub voltage_millivolts: i32,
    pub current_milliamps: i32,
}

/// Instantaneous voltage and current, read jointly from the VCODES_ICODES
/// register.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstMeasurement
{
    pub voltage_millivolts: i32,
    pub current_milliamps: i32,
}

/// Active and reactive power, read jointly from the PACTIVE_PIMAG register.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerMeasurement
{
    pub active_milliwatts: i32,
    pub reactive_milliwatts: i32,
}
