#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod intent;
pub mod light;
pub mod mode;
pub mod sequence;
pub mod state;
pub mod transport;

pub use bounds::{Sensitivity, Speed};
pub use command::{
    COMMAND_CAPACITY, Command, TERMINATOR, encode_mode_only, encode_state, encode_sync_mode,
};
pub use intent::{
    IntentQueue, IntentReceiver, IntentSender, ModeIntent, TryReceiveError, TrySendError,
};
pub use light::{ColorMode, LightTraits, SonoffL1Config, SonoffL1Light};
pub use mode::{ModeId, ModeRegister};
pub use sequence::SequenceToken;
pub use state::{LightSnapshot, LightStateSource};
pub use transport::{DEFAULT_BAUDRATE, SerialSink, send_command};

pub use color::Rgb;
pub use embassy_time::Instant;

/// Light output driven by the host
///
/// The host queries the capabilities once and calls `write_state` every time
/// the light state changes.
pub trait LightOutput {
    /// Error type of the underlying transport
    type Error;

    /// Capabilities of the light
    fn traits(&self) -> LightTraits;

    /// Send the current state to the hardware
    fn write_state<L: LightStateSource + ?Sized>(
        &mut self,
        state: &L,
        now: Instant,
    ) -> Result<(), Self::Error>;
}
