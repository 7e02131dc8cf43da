//! Sensor modules for the ITG-3200
//!
//! This module provides types, enums, and conversion helpers for the two
//! sensors on the die:
//! - Gyroscope (3-axis)
//! - Temperature
//!
//! All sensor operations are performed through methods on `Itg3200Driver`.

pub mod gyroscope;
pub mod temperature;

// Re-export main types
pub use gyroscope::{
    AxisOffsets, FullScaleRange, GyroConfig, GyroData, GyroDataDps, GyroDataRps, LowPassFilter,
    SENSITIVITY_LSB_PER_DPS,
};
pub use temperature::temperature_to_celsius;
