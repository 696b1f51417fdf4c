//! Serial transport towards the secondary controller
//!
//! The protocol is write-only. Nothing is read back, so a transport error is
//! the only failure a send can report.

use crate::command::TERMINATOR;

/// Baud rate of the L1 controller UART
pub const DEFAULT_BAUDRATE: u32 = 19_200;

/// Byte sink for the controller UART
///
/// Implement this trait for the platform UART. All calls are blocking.
pub trait SerialSink {
    /// Error type for transmit operations
    type Error;

    /// Configure the UART baud rate
    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error>;

    /// Write data to the UART
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte to the UART
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }

    /// Block until all written data has left the UART
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Send a command: text, terminator, then flush
pub fn send_command<S>(sink: &mut S, command: &str) -> Result<(), S::Error>
where
    S: SerialSink + ?Sized,
{
    sink.write(command.as_bytes())?;
    sink.write_byte(TERMINATOR)?;
    sink.flush()
}
