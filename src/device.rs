//! High-level driver API for the ITG-3200
//!
//! This module provides a user-friendly interface to the ITG-3200 gyroscope:
//! initialization, typed access to every configuration field, sampling and
//! zero-rate offset calibration.
//!
//! Every configuration property is a [`BitField`] from [`crate::registers`]
//! and goes through the same two generic accessors, [`Itg3200Driver::read_field`]
//! and [`Itg3200Driver::write_field`]. Field writes are read-modify-write
//! sequences and are not atomic: a driver instance must only be used from
//! one execution context at a time.

use crate::interrupt::{
    DriveType, InterruptConfig, InterruptPinConfig, InterruptStatus, LatchClearMethod, LatchMode,
    LogicLevel,
};
use crate::power::{ClockSource, PowerStatus, SensorPowerConfig};
use crate::registers::{
    self, ACTL, BitField, CLK_SEL, DLPF_CFG, FS_SEL, GYRO_BURST_LEN, GYRO_XOUT_H, H_RESET,
    INT_ANYRD_2CLEAR, ITG_RDY, ITG_RDY_EN, LATCH_INT_EN, OPEN, RAW_DATA_RDY, RAW_RDY_EN, SLEEP,
    STBY_XG, STBY_YG, STBY_ZG,
};
use crate::sensors::{
    AxisOffsets, FullScaleRange, GyroConfig, GyroData, GyroDataDps, GyroDataRps, LowPassFilter,
    temperature_to_celsius,
};
use crate::transport::RegisterTransport;
use crate::{Axis, Error};

/// Standby bit for one gyro axis
const fn standby_field(axis: Axis) -> BitField {
    match axis {
        Axis::X => STBY_XG,
        Axis::Y => STBY_YG,
        Axis::Z => STBY_ZG,
    }
}

/// Main driver for the ITG-3200
///
/// Owns the bus session for its whole lifetime; [`release`](Self::release)
/// hands it back.
pub struct Itg3200Driver<I> {
    interface: I,
    offsets: AxisOffsets,
}

impl<I> Itg3200Driver<I>
where
    I: RegisterTransport,
{
    /// Create a new ITG-3200 driver instance
    ///
    /// No bus traffic happens here. Call [`begin()`](Self::begin) to reset
    /// and configure the device.
    pub const fn new(interface: I) -> Self {
        Self {
            interface,
            offsets: AxisOffsets::ZERO,
        }
    }

    /// Reset the device and apply the default configuration
    ///
    /// Issues a hardware reset through `PWR_MGM`, then sets the sample rate
    /// divider to 0 and the full-scale range to ±2000°/s, in that order.
    ///
    /// **Note**: reset completion is not polled. The writes that follow are
    /// issued immediately after the reset write is acknowledged.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Steps after
    /// the failing one are not attempted.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut gyro = Itg3200Driver::new(I2cInterface::default(i2c));
    /// gyro.begin()?;
    /// ```
    pub fn begin(&mut self) -> Result<(), Error<I::Error>> {
        self.reset_device()?;
        self.set_sample_rate_divider(0)?;
        self.set_full_scale(FullScaleRange::Dps2000)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ITG-3200 reset, divider 0, full scale +/-2000 dps");

        Ok(())
    }

    // ==================== Raw register access ====================

    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        Ok(self.interface.read_byte(reg)?)
    }

    /// Write one register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        Ok(self.interface.write_byte(reg, value)?)
    }

    /// Read the value of a bit-field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_field(&mut self, field: BitField) -> Result<u8, Error<I::Error>> {
        let current = self.interface.read_byte(field.reg)?;
        Ok(field.extract(current))
    }

    /// Write the value of a bit-field, preserving the rest of the register
    ///
    /// `value` is truncated to the field width. No range check is made
    /// against the documented encodings.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_field(&mut self, field: BitField, value: u8) -> Result<(), Error<I::Error>> {
        let current = self.interface.read_byte(field.reg)?;
        self.interface
            .write_byte(field.reg, field.insert(current, value))?;
        Ok(())
    }

    /// Set every bit of a field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_bits(&mut self, field: BitField) -> Result<(), Error<I::Error>> {
        let current = self.interface.read_byte(field.reg)?;
        self.interface
            .write_byte(field.reg, current | field.register_mask())?;
        Ok(())
    }

    /// Clear every bit of a field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_bits(&mut self, field: BitField) -> Result<(), Error<I::Error>> {
        let current = self.interface.read_byte(field.reg)?;
        self.interface
            .write_byte(field.reg, current & !field.register_mask())?;
        Ok(())
    }

    fn read_flag(&mut self, field: BitField) -> Result<bool, Error<I::Error>> {
        Ok(self.read_field(field)? == 0b1)
    }

    fn write_flag(&mut self, field: BitField, enable: bool) -> Result<(), Error<I::Error>> {
        if enable {
            self.set_bits(field)
        } else {
            self.clear_bits(field)
        }
    }

    // ==================== Identity and sample rate ====================

    /// Read the `WHO_AM_I` register
    ///
    /// Bits 6:1 hold the upper six bits of the device's I2C address.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(registers::WHO_AM_I)
    }

    /// Read the sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sample_rate_divider(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(registers::SMPLRT_DIV)
    }

    /// Set the sample rate divider
    ///
    /// Sample rate = internal rate / (1 + `divider`), where the internal rate
    /// is 8 kHz with the 256 Hz filter and 1 kHz otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.write_register(registers::SMPLRT_DIV, divider)
    }

    // ==================== Gyroscope configuration ====================

    /// Read the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn full_scale(&mut self) -> Result<FullScaleRange, Error<I::Error>> {
        Ok(FullScaleRange::from_bits(self.read_field(FS_SEL)?))
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_full_scale(&mut self, range: FullScaleRange) -> Result<(), Error<I::Error>> {
        self.write_field(FS_SEL, range.bits())
    }

    /// Read the digital low pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn low_pass_filter(&mut self) -> Result<LowPassFilter, Error<I::Error>> {
        Ok(LowPassFilter::from_bits(self.read_field(DLPF_CFG)?))
    }

    /// Set the digital low pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_low_pass_filter(&mut self, filter: LowPassFilter) -> Result<(), Error<I::Error>> {
        self.write_field(DLPF_CFG, filter.bits())
    }

    /// Configure the gyroscope
    ///
    /// Writes the sample rate divider, then full scale and filter together in
    /// a single read-modify-write of `DLPF_FS`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = GyroConfig {
    ///     dlpf: LowPassFilter::Hz42,
    ///     sample_rate_div: 9, // 100 Hz
    ///     ..Default::default()
    /// };
    /// gyro.configure_gyroscope(config)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_gyroscope(&mut self, config: GyroConfig) -> Result<(), Error<I::Error>> {
        self.set_sample_rate_divider(config.sample_rate_div)?;

        let current = self.interface.read_byte(registers::DLPF_FS)?;
        let updated = DLPF_CFG.insert(
            FS_SEL.insert(current, config.full_scale.bits()),
            config.dlpf.bits(),
        );
        self.interface.write_byte(registers::DLPF_FS, updated)?;
        Ok(())
    }

    /// Read the gyroscope configuration back from the device
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyroscope_config(&mut self) -> Result<GyroConfig, Error<I::Error>> {
        let sample_rate_div = self.sample_rate_divider()?;
        let dlpf_fs = self.interface.read_byte(registers::DLPF_FS)?;
        Ok(GyroConfig {
            full_scale: FullScaleRange::from_bits(FS_SEL.extract(dlpf_fs)),
            dlpf: LowPassFilter::from_bits(DLPF_CFG.extract(dlpf_fs)),
            sample_rate_div,
        })
    }

    // ==================== Interrupts ====================

    /// Check whether the raw-data-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_raw_data_ready_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_flag(RAW_RDY_EN)
    }

    /// Enable or disable the raw-data-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_raw_data_ready_enabled(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_flag(RAW_RDY_EN, enable)
    }

    /// Check whether the PLL-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_pll_ready_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_flag(ITG_RDY_EN)
    }

    /// Enable or disable the PLL-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pll_ready_enabled(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_flag(ITG_RDY_EN, enable)
    }

    /// Read the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn logic_level(&mut self) -> Result<LogicLevel, Error<I::Error>> {
        Ok(LogicLevel::from_bits(self.read_field(ACTL)?))
    }

    /// Set the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_logic_level(&mut self, level: LogicLevel) -> Result<(), Error<I::Error>> {
        self.write_flag(ACTL, level == LogicLevel::ActiveLow)
    }

    /// Read the interrupt pin drive type
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn drive_type(&mut self) -> Result<DriveType, Error<I::Error>> {
        Ok(DriveType::from_bits(self.read_field(OPEN)?))
    }

    /// Set the interrupt pin drive type
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_drive_type(&mut self, drive: DriveType) -> Result<(), Error<I::Error>> {
        self.write_flag(OPEN, drive == DriveType::OpenDrain)
    }

    /// Read the interrupt latch mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn latch_mode(&mut self) -> Result<LatchMode, Error<I::Error>> {
        Ok(LatchMode::from_bits(self.read_field(LATCH_INT_EN)?))
    }

    /// Set the interrupt latch mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_latch_mode(&mut self, mode: LatchMode) -> Result<(), Error<I::Error>> {
        self.write_flag(LATCH_INT_EN, mode == LatchMode::LatchUntilCleared)
    }

    /// Read how a latched interrupt is cleared
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn latch_clear_method(&mut self) -> Result<LatchClearMethod, Error<I::Error>> {
        Ok(LatchClearMethod::from_bits(
            self.read_field(INT_ANYRD_2CLEAR)?,
        ))
    }

    /// Set how a latched interrupt is cleared
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_latch_clear_method(
        &mut self,
        method: LatchClearMethod,
    ) -> Result<(), Error<I::Error>> {
        self.write_flag(INT_ANYRD_2CLEAR, method == LatchClearMethod::AnyRegisterRead)
    }

    /// Configure the interrupt pin electrical behaviour in one write
    ///
    /// The interrupt source enables in the same register are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        let mut value = self.interface.read_byte(registers::INT_CFG)?;
        value = ACTL.insert(value, config.logic_level.bits());
        value = OPEN.insert(value, config.drive_type.bits());
        value = LATCH_INT_EN.insert(value, config.latch_mode.bits());
        value = INT_ANYRD_2CLEAR.insert(value, config.latch_clear.bits());
        self.interface.write_byte(registers::INT_CFG, value)?;
        Ok(())
    }

    /// Read the interrupt pin configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_pin_config(&mut self) -> Result<InterruptPinConfig, Error<I::Error>> {
        let value = self.interface.read_byte(registers::INT_CFG)?;
        Ok(InterruptPinConfig {
            logic_level: LogicLevel::from_bits(ACTL.extract(value)),
            drive_type: DriveType::from_bits(OPEN.extract(value)),
            latch_mode: LatchMode::from_bits(LATCH_INT_EN.extract(value)),
            latch_clear: LatchClearMethod::from_bits(INT_ANYRD_2CLEAR.extract(value)),
        })
    }

    /// Enable or disable interrupt sources in one write
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupts(&mut self, config: &InterruptConfig) -> Result<(), Error<I::Error>> {
        let mut value = self.interface.read_byte(registers::INT_CFG)?;
        value = ITG_RDY_EN.insert(value, u8::from(config.pll_ready));
        value = RAW_RDY_EN.insert(value, u8::from(config.raw_data_ready));
        self.interface.write_byte(registers::INT_CFG, value)?;
        Ok(())
    }

    /// Check whether the PLL is ready
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_pll_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_flag(ITG_RDY)
    }

    /// Check whether new raw data is ready
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_raw_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_flag(RAW_DATA_RDY)
    }

    /// Read both interrupt status flags from one `INT_STATUS` read
    ///
    /// Reading `INT_STATUS` clears a latched interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let value = self.interface.read_byte(registers::INT_STATUS)?;
        Ok(InterruptStatus {
            pll_ready: ITG_RDY.extract(value) == 1,
            raw_data_ready: RAW_DATA_RDY.extract(value) == 1,
        })
    }

    // ==================== Power management ====================

    /// Issue a hardware reset
    ///
    /// The reset bit clears itself on the device.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_device(&mut self) -> Result<(), Error<I::Error>> {
        self.set_bits(H_RESET)
    }

    /// Check whether the device is in sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_sleep(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_flag(SLEEP)
    }

    /// Enter or leave sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sleep(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_flag(SLEEP, enable)
    }

    /// Check whether one gyro axis is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_standby(&mut self, axis: Axis) -> Result<bool, Error<I::Error>> {
        self.read_flag(standby_field(axis))
    }

    /// Put one gyro axis in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_standby(&mut self, axis: Axis, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_flag(standby_field(axis), enable)
    }

    /// Set the standby state of all three axes in one write
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_sensor_power(
        &mut self,
        config: &SensorPowerConfig,
    ) -> Result<(), Error<I::Error>> {
        let mut value = self.interface.read_byte(registers::PWR_MGM)?;
        value = STBY_XG.insert(value, u8::from(config.standby_x));
        value = STBY_YG.insert(value, u8::from(config.standby_y));
        value = STBY_ZG.insert(value, u8::from(config.standby_z));
        self.interface.write_byte(registers::PWR_MGM, value)?;
        Ok(())
    }

    /// Read the clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clock_source(&mut self) -> Result<ClockSource, Error<I::Error>> {
        Ok(ClockSource::from_bits(self.read_field(CLK_SEL)?))
    }

    /// Select the clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        self.write_field(CLK_SEL, source.bits())
    }

    /// Read sleep, standby and clock source from one `PWR_MGM` read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_power_status(&mut self) -> Result<PowerStatus, Error<I::Error>> {
        let value = self.interface.read_byte(registers::PWR_MGM)?;
        Ok(PowerStatus {
            sleep: SLEEP.extract(value) == 1,
            standby: SensorPowerConfig {
                standby_x: STBY_XG.extract(value) == 1,
                standby_y: STBY_YG.extract(value) == 1,
                standby_z: STBY_ZG.extract(value) == 1,
            },
            clock_source: ClockSource::from_bits(CLK_SEL.extract(value)),
        })
    }

    // ==================== Sampling ====================

    /// Read all three axes in one burst, without offset correction
    fn read_gyro_uncorrected(&mut self) -> Result<GyroData, Error<I::Error>> {
        let mut buffer = [0u8; GYRO_BURST_LEN];
        self.interface.read_burst(GYRO_XOUT_H, &mut buffer)?;
        Ok(GyroData::from_be_bytes(buffer))
    }

    /// Read raw gyroscope data with the zero-rate offsets applied
    ///
    /// All six output bytes are fetched in a single transaction so the three
    /// axes always belong to the same sample.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw_axes(&mut self) -> Result<GyroData, Error<I::Error>> {
        let raw = self.read_gyro_uncorrected()?;
        Ok(self.offsets.apply(raw))
    }

    /// Read gyroscope data in degrees per second
    ///
    /// Offsets are applied before conversion.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let rate = gyro.read_angular_velocity()?;
    /// println!("X: {}°/s, Y: {}°/s, Z: {}°/s", rate.x, rate.y, rate.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_angular_velocity(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let data = self.read_raw_axes()?;
        Ok(GyroDataDps::from_raw(data))
    }

    /// Read gyroscope data in radians per second
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_angular_velocity_radians(&mut self) -> Result<GyroDataRps, Error<I::Error>> {
        Ok(self.read_angular_velocity()?.to_radians_per_sec())
    }

    /// Read the raw temperature sensor value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(self.interface.read_word(registers::TEMP_OUT_H)?)
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature()?;
        Ok(temperature_to_celsius(raw))
    }

    // ==================== Calibration ====================

    /// Estimate and store the zero-rate offsets. The device must be stationary.
    ///
    /// Offsets are cleared, one reading is discarded, then `samples` readings
    /// are summed per axis. Each offset is the truncated mean with its sign
    /// inverted, so it pulls the mean reading toward zero. The result is
    /// stored and applied to every later [`read_raw_axes`](Self::read_raw_axes).
    ///
    /// # Arguments
    ///
    /// * `samples` - Number of samples to average. With 0 the offsets stay at zero.
    /// * `sample_delay_ms` - Pause before each sample (0 disables the pause)
    /// * `delay` - Delay provider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. The offsets
    /// are left at zero in that case.
    pub fn calibrate<D>(
        &mut self,
        samples: u16,
        sample_delay_ms: u32,
        delay: &mut D,
    ) -> Result<AxisOffsets, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.offsets = AxisOffsets::ZERO;

        // First reading may be stale
        self.read_gyro_uncorrected()?;

        let mut sums = [0i64; 3];
        for _ in 0..samples {
            if sample_delay_ms > 0 {
                delay.delay_ms(sample_delay_ms);
            }
            let data = self.read_gyro_uncorrected()?;
            sums[0] += i64::from(data.x);
            sums[1] += i64::from(data.y);
            sums[2] += i64::from(data.z);
        }

        let offsets = AxisOffsets::from_sums(sums, u32::from(samples));
        self.offsets = offsets;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Gyro calibrated over {} samples: offsets x={} y={} z={}",
            samples,
            offsets.x,
            offsets.y,
            offsets.z
        );

        Ok(offsets)
    }

    /// Current zero-rate offsets
    #[must_use]
    pub const fn offsets(&self) -> AxisOffsets {
        self.offsets
    }

    /// Replace the zero-rate offsets
    pub const fn set_offsets(&mut self, offsets: AxisOffsets) {
        self.offsets = offsets;
    }

    /// Zero-rate offset of one axis
    #[must_use]
    pub const fn axis_offset(&self, axis: Axis) -> i16 {
        self.offsets.get(axis)
    }

    /// Replace the zero-rate offset of one axis
    pub const fn set_axis_offset(&mut self, axis: Axis, offset: i16) {
        self.offsets.set(axis, offset);
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Get a reference to the underlying interface
    pub const fn interface(&self) -> &I {
        &self.interface
    }
}
