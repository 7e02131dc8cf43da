#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;
pub mod transport;

pub mod interrupt;
pub mod power;

// Re-export main types
pub use device::Itg3200Driver;
pub use interface::I2cInterface;
pub use registers::BitField;
pub use sensors::{
    AxisOffsets, FullScaleRange, GyroConfig, GyroData, GyroDataDps, GyroDataRps, LowPassFilter,
    SENSITIVITY_LSB_PER_DPS,
};
pub use transport::RegisterTransport;

pub use interrupt::{
    DriveType, InterruptConfig, InterruptPinConfig, InterruptStatus, LatchClearMethod, LatchMode,
    LogicLevel,
};
pub use power::{ClockSource, PowerStatus, SensorPowerConfig};

/// ITG-3200 I2C address when AD0 pin is low (default: 0x68)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// ITG-3200 I2C address when AD0 pin is high (alternative: 0x69)
///
/// Many breakout boards tie AD0 high. Use [`I2cInterface::alternative()`]
/// for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Bus clock the ITG-3200 is driven at (I2C fast mode, 400 kHz)
pub const I2C_CLOCK_HZ: u32 = 400_000;

/// Gyroscope axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

/// Driver errors
///
/// The only failure the driver itself can observe is a failed bus
/// transaction. The underlying error is passed through untouched; nothing is
/// retried.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
