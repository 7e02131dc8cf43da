//! Register map for the ITG-3200
//!
//! The ITG-3200 has a single flat 8-bit register space. Configuration
//! properties are sub-ranges of bits inside a few registers; each one is
//! described by a [`BitField`] constant and accessed through the generic
//! field accessors on the driver, so every property shares one
//! read-modify-write path.
//!
//! | Register      | Addr | Contents                                             |
//! |---------------|------|------------------------------------------------------|
//! | `WHO_AM_I`    | 0x00 | device identity                                      |
//! | `SMPLRT_DIV`  | 0x15 | sample rate divider                                  |
//! | `DLPF_FS`     | 0x16 | `FS_SEL` \[4:3\], `DLPF_CFG` \[2:0\]                 |
//! | `INT_CFG`     | 0x17 | ACTL, OPEN, `LATCH_INT_EN`, `INT_ANYRD_2CLEAR`, ...  |
//! | `INT_STATUS`  | 0x1A | `ITG_RDY`, `RAW_DATA_RDY`                            |
//! | `TEMP_OUT`    | 0x1B | temperature, big-endian                              |
//! | `GYRO_*OUT`   | 0x1D | X, Y, Z, big-endian, contiguous                      |
//! | `PWR_MGM`     | 0x3E | `H_RESET`, SLEEP, `STBY_*G`, `CLK_SEL` \[2:0\]       |

/// `WHO_AM_I` - Device identity (bits 6:1 hold the I2C address)
pub const WHO_AM_I: u8 = 0x00;
/// `SMPLRT_DIV` - Sample rate divider
pub const SMPLRT_DIV: u8 = 0x15;
/// `DLPF_FS` - Full scale and digital low pass filter configuration
pub const DLPF_FS: u8 = 0x16;
/// `INT_CFG` - Interrupt configuration
pub const INT_CFG: u8 = 0x17;
/// `INT_STATUS` - Interrupt status
pub const INT_STATUS: u8 = 0x1A;
/// `TEMP_OUT_H` - Temperature high byte (low byte follows at 0x1C)
pub const TEMP_OUT_H: u8 = 0x1B;
/// `GYRO_XOUT_H` - First of the six gyro output registers (0x1D..=0x22)
pub const GYRO_XOUT_H: u8 = 0x1D;
/// `PWR_MGM` - Power management
pub const PWR_MGM: u8 = 0x3E;

/// Number of bytes in one X/Y/Z gyro burst
pub const GYRO_BURST_LEN: usize = 6;

/// A named sub-range of bits inside one register
///
/// `mask` is the right-aligned width mask (e.g. `0b111` for a 3-bit field)
/// and `bit` the position of the field's least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Register address
    pub reg: u8,
    /// Right-aligned width mask
    pub mask: u8,
    /// Bit offset of the field within the register
    pub bit: u8,
}

impl BitField {
    /// Create a field descriptor
    pub const fn new(reg: u8, mask: u8, bit: u8) -> Self {
        Self { reg, mask, bit }
    }

    /// Create a single-bit field descriptor
    pub const fn flag(reg: u8, bit: u8) -> Self {
        Self::new(reg, 0b1, bit)
    }

    /// Mask of the field's bits in register position
    #[must_use]
    pub const fn register_mask(self) -> u8 {
        self.mask << self.bit
    }

    /// Extract this field's value from a full register value
    #[must_use]
    pub const fn extract(self, register: u8) -> u8 {
        (register & self.register_mask()) >> self.bit
    }

    /// Replace this field's bits in `register` with `value`
    ///
    /// `value` is truncated to the field width; bits outside the field are
    /// left untouched.
    #[must_use]
    pub const fn insert(self, register: u8, value: u8) -> u8 {
        (register & !self.register_mask()) | ((value & self.mask) << self.bit)
    }
}

// ==================== DLPF_FS ====================

/// `FS_SEL` - Full scale selection
pub const FS_SEL: BitField = BitField::new(DLPF_FS, 0b11, 3);
/// `DLPF_CFG` - Digital low pass filter bandwidth
pub const DLPF_CFG: BitField = BitField::new(DLPF_FS, 0b111, 0);

// ==================== INT_CFG ====================

/// ACTL - Interrupt pin logic level (0 = active high, 1 = active low)
pub const ACTL: BitField = BitField::flag(INT_CFG, 7);
/// OPEN - Interrupt pin drive (0 = push-pull, 1 = open drain)
pub const OPEN: BitField = BitField::flag(INT_CFG, 6);
/// `LATCH_INT_EN` - Latch mode (0 = 50 us pulse, 1 = latch until cleared)
pub const LATCH_INT_EN: BitField = BitField::flag(INT_CFG, 5);
/// `INT_ANYRD_2CLEAR` - Latch clear (0 = status register read, 1 = any register read)
pub const INT_ANYRD_2CLEAR: BitField = BitField::flag(INT_CFG, 4);
/// `ITG_RDY_EN` - Interrupt when PLL is ready
pub const ITG_RDY_EN: BitField = BitField::flag(INT_CFG, 2);
/// `RAW_RDY_EN` - Interrupt when raw data is ready
pub const RAW_RDY_EN: BitField = BitField::flag(INT_CFG, 0);

// ==================== INT_STATUS ====================

/// `ITG_RDY` - PLL ready (read-only)
pub const ITG_RDY: BitField = BitField::flag(INT_STATUS, 2);
/// `RAW_DATA_RDY` - Raw data ready (read-only)
pub const RAW_DATA_RDY: BitField = BitField::flag(INT_STATUS, 0);

// ==================== PWR_MGM ====================

/// `H_RESET` - Device reset, self-clearing
pub const H_RESET: BitField = BitField::flag(PWR_MGM, 7);
/// SLEEP - Low power sleep mode
pub const SLEEP: BitField = BitField::flag(PWR_MGM, 6);
/// `STBY_XG` - Put gyro X in standby
pub const STBY_XG: BitField = BitField::flag(PWR_MGM, 5);
/// `STBY_YG` - Put gyro Y in standby
pub const STBY_YG: BitField = BitField::flag(PWR_MGM, 4);
/// `STBY_ZG` - Put gyro Z in standby
pub const STBY_ZG: BitField = BitField::flag(PWR_MGM, 3);
/// `CLK_SEL` - Clock source
pub const CLK_SEL: BitField = BitField::new(PWR_MGM, 0b111, 0);

/// Every persistent read/write configuration field
///
/// `H_RESET` is left out since it reads back as 0 once the reset completes.
pub const CONFIG_FIELDS: [BitField; 13] = [
    FS_SEL,
    DLPF_CFG,
    ACTL,
    OPEN,
    LATCH_INT_EN,
    INT_ANYRD_2CLEAR,
    ITG_RDY_EN,
    RAW_RDY_EN,
    SLEEP,
    STBY_XG,
    STBY_YG,
    STBY_ZG,
    CLK_SEL,
];
