//! Bus interface for the ITG-3200
//!
//! [`I2cInterface`] is the device session: it binds a caller-supplied
//! `embedded-hal` I2C bus to the gyroscope's 7-bit address and records the
//! bus clock the driver expects. It implements the `device-driver`
//! [`RegisterInterface`] trait, which is the only bus surface the driver uses.

use crate::{I2C_ADDRESS_AD0_HIGH, I2C_ADDRESS_AD0_LOW, I2C_CLOCK_HZ};
use device_driver::RegisterInterface;

/// Largest contiguous register block written in one transaction
const MAX_WRITE_LEN: usize = 6;

/// I2C interface for the ITG-3200
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    clock_hz: u32,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut gyro = Itg3200Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self::new(i2c, I2C_ADDRESS_AD0_LOW)
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn alternative(i2c: I2C) -> Self {
        Self::new(i2c, I2C_ADDRESS_AD0_HIGH)
    }

    /// Create a new I2C interface with a custom 7-bit device address
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            clock_hz: I2C_CLOCK_HZ,
        }
    }

    /// Record a bus clock other than the 400 kHz default
    ///
    /// The frequency is applied to the peripheral by the HAL when the bus is
    /// built; this only records what the session was negotiated at.
    #[must_use]
    pub const fn with_clock_rate(mut self, hz: u32) -> Self {
        self.clock_hz = hz;
        self
    }

    /// 7-bit device address this session talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Bus clock rate in Hz
    pub const fn clock_rate_hz(&self) -> u32 {
        self.clock_hz
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        // Register pointer auto-increments, so one transaction covers a burst
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        let len = write_data.len().min(MAX_WRITE_LEN);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}
