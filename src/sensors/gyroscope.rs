//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and utility functions for the ITG-3200's 3-axis gyroscope.

use crate::Axis;

/// Fixed sensitivity of the ITG-3200 in LSB/(°/s)
pub const SENSITIVITY_LSB_PER_DPS: f32 = 14.375;

/// Gyroscope full-scale range (`FS_SEL`)
///
/// Only ±2000°/s is documented for the ITG-3200; the remaining encodings are
/// reserved and are carried through as [`FullScaleRange::Reserved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScaleRange {
    /// ±2000°/s range (`FS_SEL` = 3)
    Dps2000,
    /// Reserved encoding
    Reserved(u8),
}

impl FullScaleRange {
    /// Raw `FS_SEL` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dps2000 => 3,
            Self::Reserved(bits) => bits,
        }
    }

    /// Decode a raw `FS_SEL` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            3 => Self::Dps2000,
            other => Self::Reserved(other),
        }
    }

    /// Get the maximum value in °/s, if the encoding is documented
    #[must_use]
    pub const fn max_value(self) -> Option<u16> {
        match self {
            Self::Dps2000 => Some(2000),
            Self::Reserved(_) => None,
        }
    }
}

/// Gyroscope Digital Low Pass Filter (`DLPF_CFG`) bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassFilter {
    /// 256 Hz bandwidth, 8 kHz internal sample rate
    Hz256,
    /// 188 Hz bandwidth
    Hz188,
    /// 98 Hz bandwidth
    Hz98,
    /// 42 Hz bandwidth
    Hz42,
    /// 20 Hz bandwidth
    Hz20,
    /// 10 Hz bandwidth
    Hz10,
    /// 5 Hz bandwidth
    Hz5,
    /// Reserved encoding
    Reserved(u8),
}

impl LowPassFilter {
    /// Raw `DLPF_CFG` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz256 => 0,
            Self::Hz188 => 1,
            Self::Hz98 => 2,
            Self::Hz42 => 3,
            Self::Hz20 => 4,
            Self::Hz10 => 5,
            Self::Hz5 => 6,
            Self::Reserved(bits) => bits,
        }
    }

    /// Decode a raw `DLPF_CFG` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Hz256,
            1 => Self::Hz188,
            2 => Self::Hz98,
            3 => Self::Hz42,
            4 => Self::Hz20,
            5 => Self::Hz10,
            6 => Self::Hz5,
            other => Self::Reserved(other),
        }
    }

    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> Option<u16> {
        match self {
            Self::Hz256 => Some(256),
            Self::Hz188 => Some(188),
            Self::Hz98 => Some(98),
            Self::Hz42 => Some(42),
            Self::Hz20 => Some(20),
            Self::Hz10 => Some(10),
            Self::Hz5 => Some(5),
            Self::Reserved(_) => None,
        }
    }

    /// Internal sample rate feeding the divider, in Hz
    #[must_use]
    pub const fn internal_sample_rate_hz(self) -> u16 {
        match self {
            Self::Hz256 => 8000,
            _ => 1000,
        }
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub full_scale: FullScaleRange,
    /// Digital Low Pass Filter configuration
    pub dlpf: LowPassFilter,
    /// Sample rate divider (0-255)
    /// Actual sample rate = internal rate / (1 + `sample_rate_div`)
    pub sample_rate_div: u8,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            full_scale: FullScaleRange::Dps2000,
            dlpf: LowPassFilter::Hz256,
            sample_rate_div: 0,
        }
    }
}

impl GyroConfig {
    /// Calculate the effective sample rate in Hz
    #[must_use]
    pub fn sample_rate_hz(&self) -> f32 {
        f32::from(self.dlpf.internal_sample_rate_hz()) / (1.0 + f32::from(self.sample_rate_div))
    }
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

impl GyroData {
    /// Compose the three axes from a `GYRO_XOUT_H..=GYRO_ZOUT_L` burst
    #[must_use]
    pub const fn from_be_bytes(buffer: [u8; 6]) -> Self {
        Self {
            x: i16::from_be_bytes([buffer[0], buffer[1]]),
            y: i16::from_be_bytes([buffer[2], buffer[3]]),
            z: i16::from_be_bytes([buffer[4], buffer[5]]),
        }
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Convert raw axis counts using the fixed 14.375 LSB/(°/s) sensitivity
    #[must_use]
    pub fn from_raw(raw: GyroData) -> Self {
        Self {
            x: f32::from(raw.x) / SENSITIVITY_LSB_PER_DPS,
            y: f32::from(raw.y) / SENSITIVITY_LSB_PER_DPS,
            z: f32::from(raw.z) / SENSITIVITY_LSB_PER_DPS,
        }
    }

    /// Convert to radians per second
    #[must_use]
    pub fn to_radians_per_sec(&self) -> GyroDataRps {
        const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
        GyroDataRps {
            x: self.x * DEG_TO_RAD,
            y: self.y * DEG_TO_RAD,
            z: self.z * DEG_TO_RAD,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Gyroscope data in radians per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataRps {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroDataRps {
    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Zero-rate offsets, added to every raw reading
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisOffsets {
    /// Offset for X-axis
    pub x: i16,
    /// Offset for Y-axis
    pub y: i16,
    /// Offset for Z-axis
    pub z: i16,
}

impl AxisOffsets {
    /// Offsets that leave readings unchanged
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Apply offsets to a raw reading (16-bit wrapping addition)
    #[must_use]
    pub const fn apply(&self, raw: GyroData) -> GyroData {
        GyroData {
            x: raw.x.wrapping_add(self.x),
            y: raw.y.wrapping_add(self.y),
            z: raw.z.wrapping_add(self.z),
        }
    }

    /// Derive offsets from per-axis sums of `samples` stationary readings
    ///
    /// Each offset is the truncated average with its sign inverted, so
    /// adding it pulls the mean reading toward zero.
    #[must_use]
    pub fn from_sums(sums: [i64; 3], samples: u32) -> Self {
        Self {
            x: offset_from_sum(sums[0], samples),
            y: offset_from_sum(sums[1], samples),
            z: offset_from_sum(sums[2], samples),
        }
    }

    /// Offset for one axis
    #[must_use]
    pub const fn get(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replace the offset for one axis
    pub const fn set(&mut self, axis: Axis, offset: i16) {
        match axis {
            Axis::X => self.x = offset,
            Axis::Y => self.y = offset,
            Axis::Z => self.z = offset,
        }
    }
}

fn offset_from_sum(sum: i64, samples: u32) -> i16 {
    if samples == 0 {
        return 0;
    }
    // |mean| can reach 32768 when every sample is i16::MIN
    let magnitude = i16::try_from(sum.unsigned_abs() / u64::from(samples)).unwrap_or(i16::MAX);
    if sum > 0 { -magnitude } else { magnitude }
}
