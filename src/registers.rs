
pub const EEPROM_0F: u8 = 0x0F; //[8:2] I2C_SLV_ADDR, [9] I2C_DIS_SLV_ADDR

pub const SHADOW_1F: u8 = 0x1F; //[23:14] N, [24] BYPASS_N_EN

pub const VRMS_IRMS: u8 = 0x20; //[15:0] VRMS, [31:16] IRMS (both unsigned)
pub const PACTIVE_PIMAG: u8 = 0x21; //[15:0] PACTIVE, [31:16] PIMAG (both signed)
pub const PAPPARENT: u8 = 0x22; //[15:0] PAPPARENT (unsigned)

pub const VCODES_ICODES: u8 = 0x2A; //[15:0] VCODES, [31:16] ICODES (both signed)
pub const PINSTANT: u8 = 0x2C; //[15:0] PINSTANT (signed)

pub const ACCESS_CODE: u8 = 0x2F;

/// Magic value that must be written to the ACCESS_CODE register to unlock
/// write access to the other registers.
///
pub const ACCESS_CODE_VALUE: u32 = 0x4F70656E;
