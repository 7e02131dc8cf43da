//! Power management
//!
//! `PWR_MGM` holds the self-clearing device reset bit, sleep mode, per-axis
//! gyro standby and the clock source selection.
//!
//! Leaving the internal oscillator for one of the gyro-referenced PLLs is
//! recommended by the datasheet for better stability:
//!
//! ```ignore
//! # use itg3200::{Itg3200Driver, ClockSource};
//! # let mut gyro: Itg3200Driver<_> = todo!();
//! gyro.set_clock_source(ClockSource::PllGyroZ)?;
//! # Ok::<(), itg3200::Error<()>>(())
//! ```

/// Clock source selection (`CLK_SEL`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal oscillator
    #[default]
    Internal,
    /// PLL with X gyro reference
    PllGyroX,
    /// PLL with Y gyro reference
    PllGyroY,
    /// PLL with Z gyro reference
    PllGyroZ,
    /// PLL with external 32.768 kHz reference
    PllExternal32kHz,
    /// PLL with external 19.2 MHz reference
    PllExternal19MHz,
    /// Reserved encoding
    Reserved(u8),
}

impl ClockSource {
    /// Raw `CLK_SEL` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Internal => 0,
            Self::PllGyroX => 1,
            Self::PllGyroY => 2,
            Self::PllGyroZ => 3,
            Self::PllExternal32kHz => 4,
            Self::PllExternal19MHz => 5,
            Self::Reserved(bits) => bits,
        }
    }

    /// Decode a raw `CLK_SEL` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Internal,
            1 => Self::PllGyroX,
            2 => Self::PllGyroY,
            3 => Self::PllGyroZ,
            4 => Self::PllExternal32kHz,
            5 => Self::PllExternal19MHz,
            other => Self::Reserved(other),
        }
    }
}

/// Per-axis gyro standby configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorPowerConfig {
    /// Put gyro X in standby
    pub standby_x: bool,
    /// Put gyro Y in standby
    pub standby_y: bool,
    /// Put gyro Z in standby
    pub standby_z: bool,
}

impl SensorPowerConfig {
    /// All axes active
    pub const fn all_active() -> Self {
        Self {
            standby_x: false,
            standby_y: false,
            standby_z: false,
        }
    }
}

/// Snapshot of `PWR_MGM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerStatus {
    /// Device is in sleep mode
    pub sleep: bool,
    /// Standby state of each gyro axis
    pub standby: SensorPowerConfig,
    /// Selected clock source
    pub clock_source: ClockSource,
}
