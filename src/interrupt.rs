//! Interrupt configuration and status
//!
//! The ITG-3200 has a single interrupt pin that can fire when new raw data
//! is ready or when the PLL has locked. Pin electrical behaviour and latching
//! are configured in `INT_CFG`; the flags are read back from `INT_STATUS`.
//!
//! # Example
//!
//! ```ignore
//! # use itg3200::{Itg3200Driver, InterruptConfig, InterruptPinConfig, DriveType, LogicLevel};
//! # let mut gyro: Itg3200Driver<_> = todo!();
//! let pin_config = InterruptPinConfig {
//!     logic_level: LogicLevel::ActiveLow,
//!     drive_type: DriveType::OpenDrain,
//!     ..Default::default()
//! };
//! gyro.configure_interrupt_pin(&pin_config)?;
//! gyro.configure_interrupts(&InterruptConfig::data_ready_only())?;
//! # Ok::<(), itg3200::Error<()>>(())
//! ```

/// Logic level of the interrupt pin (ACTL)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicLevel {
    /// Pin is driven high when asserted
    #[default]
    ActiveHigh = 0,
    /// Pin is driven low when asserted
    ActiveLow = 1,
}

/// Drive type of the interrupt pin (OPEN)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveType {
    /// Push-pull output
    #[default]
    PushPull = 0,
    /// Open-drain output
    OpenDrain = 1,
}

/// Interrupt latch mode (`LATCH_INT_EN`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchMode {
    /// 50 us pulse
    #[default]
    Pulse50Us = 0,
    /// Hold the pin asserted until the interrupt is cleared
    LatchUntilCleared = 1,
}

/// How a latched interrupt is cleared (`INT_ANYRD_2CLEAR`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchClearMethod {
    /// Only reading `INT_STATUS` clears it
    #[default]
    StatusRead = 0,
    /// Reading any register clears it
    AnyRegisterRead = 1,
}

macro_rules! single_bit_enum {
    ($name:ident, $zero:ident, $one:ident) => {
        impl $name {
            /// Raw single-bit field value
            #[must_use]
            pub const fn bits(self) -> u8 {
                self as u8
            }

            /// Decode a raw single-bit field value (only bit 0 is considered)
            #[must_use]
            pub const fn from_bits(bits: u8) -> Self {
                if bits & 0b1 == 0 { Self::$zero } else { Self::$one }
            }
        }
    };
}

single_bit_enum!(LogicLevel, ActiveHigh, ActiveLow);
single_bit_enum!(DriveType, PushPull, OpenDrain);
single_bit_enum!(LatchMode, Pulse50Us, LatchUntilCleared);
single_bit_enum!(LatchClearMethod, StatusRead, AnyRegisterRead);

/// Interrupt pin electrical configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    /// Pin logic level
    pub logic_level: LogicLevel,
    /// Pin drive type
    pub drive_type: DriveType,
    /// Pulse or latch
    pub latch_mode: LatchMode,
    /// What clears a latched interrupt
    pub latch_clear: LatchClearMethod,
}

impl InterruptPinConfig {
    /// Active-low, open-drain, latched until `INT_STATUS` is read
    ///
    /// Suits a shared interrupt line with a pull-up.
    pub const fn open_drain_latched() -> Self {
        Self {
            logic_level: LogicLevel::ActiveLow,
            drive_type: DriveType::OpenDrain,
            latch_mode: LatchMode::LatchUntilCleared,
            latch_clear: LatchClearMethod::StatusRead,
        }
    }
}

/// Interrupt source configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig {
    /// Enable PLL ready interrupt
    pub pll_ready: bool,
    /// Enable raw data ready interrupt (fires when new sensor data is available)
    pub raw_data_ready: bool,
}

impl InterruptConfig {
    /// Create configuration with only data ready interrupt enabled
    pub const fn data_ready_only() -> Self {
        Self {
            pll_ready: false,
            raw_data_ready: true,
        }
    }

    /// Check if any interrupt is enabled
    pub const fn any_enabled(&self) -> bool {
        self.pll_ready || self.raw_data_ready
    }
}

/// Interrupt status flags
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// PLL is locked and ready
    pub pll_ready: bool,
    /// New raw data is available
    pub raw_data_ready: bool,
}

impl InterruptStatus {
    /// Check if any interrupt flag is set
    pub const fn any_set(&self) -> bool {
        self.pll_ready || self.raw_data_ready
    }
}
