//! Register transport
//!
//! Byte, word and burst access on top of any [`RegisterInterface`] with 8-bit
//! register addresses. Every call is one synchronous bus transaction: there
//! is no caching, queuing or retry, and a failed transaction is reported as
//! the interface's own error.

use device_driver::RegisterInterface;

/// Single-register and burst access to an 8-bit register map
///
/// Blanket-implemented for every `RegisterInterface<AddressType = u8>`.
pub trait RegisterTransport {
    /// Transport error
    type Error;

    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns the transport error if either the address write or the data
    /// read fails.
    fn read_byte(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Write one register as a single `[reg, value]` transaction
    ///
    /// # Errors
    ///
    /// Returns the transport error if the write fails.
    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Read a big-endian signed 16-bit value from `reg` (high) and `reg + 1` (low)
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn read_word(&mut self, reg: u8) -> Result<i16, Self::Error>;

    /// Fill `buffer` from contiguous registers starting at `reg`
    ///
    /// The start address is written once and all bytes come back in the same
    /// transaction, so multi-register values cannot tear.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the transaction fails.
    fn read_burst(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I> RegisterTransport for I
where
    I: RegisterInterface<AddressType = u8>,
{
    type Error = I::Error;

    fn read_byte(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut buffer = [0u8; 1];
        self.read_register(reg, 8, &mut buffer)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.write_register(reg, 8, &[value])
    }

    fn read_word(&mut self, reg: u8) -> Result<i16, Self::Error> {
        let mut buffer = [0u8; 2];
        self.read_register(reg, 16, &mut buffer)?;
        Ok(i16::from_be_bytes(buffer))
    }

    fn read_burst(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        #[allow(clippy::cast_possible_truncation)]
        let size_bits = (buffer.len() * 8) as u32;
        self.read_register(reg, size_bits, buffer)
    }
}
