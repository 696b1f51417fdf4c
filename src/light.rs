//! Sonoff L1 light output
//!
//! Glues the mode register, the encoder and the UART together. The host
//! calls [`LightOutput::write_state`] on every state change; effect handlers
//! call the `set_mode_*` entry points.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LightOutput;
use crate::bounds::{Sensitivity, Speed};
use crate::command::{Command, encode_mode_only, encode_state, encode_sync_mode};
use crate::intent::{IntentReceiver, ModeIntent};
use crate::mode::{ModeId, ModeRegister, is_static_effect_label};
use crate::state::{LightSnapshot, LightStateSource};
use crate::transport::{DEFAULT_BAUDRATE, SerialSink, send_command};

/// Color modes a light can expose to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// RGB color with brightness
    Rgb,
}

impl ColorMode {
    /// Name used by the host
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
        }
    }
}

/// Capabilities reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightTraits {
    pub color_modes: &'static [ColorMode],
    /// Modes the host may offer as named effects
    pub effects: &'static [ModeId],
}

impl LightTraits {
    /// Returns if the color mode is supported
    pub fn supports(&self, mode: ColorMode) -> bool {
        self.color_modes.contains(&mode)
    }
}

const L1_TRAITS: LightTraits = LightTraits {
    color_modes: &[ColorMode::Rgb],
    effects: &ModeId::ALL,
};

/// Configuration for the L1 light
#[derive(Debug, Clone, Copy)]
pub struct SonoffL1Config {
    /// UART baud rate
    pub baudrate: u32,
    /// Mode assumed at startup
    pub mode: ModeId,
    /// Initial Sync-to-Music sensitivity, clamped to 1-10
    pub sensitivity: i32,
    /// Initial Sync-to-Music speed, clamped to 1-100
    pub speed: i32,
}

impl Default for SonoffL1Config {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
            mode: ModeId::Colorful,
            sensitivity: i32::from(Sensitivity::DEFAULT.get()),
            speed: i32::from(Speed::DEFAULT.get()),
        }
    }
}

/// Sonoff L1 light output
///
/// Owns the mode register and sends exactly one command per state or mode
/// change. Nothing is queued or coalesced.
pub struct SonoffL1Light<S: SerialSink> {
    sink: S,
    baudrate: u32,
    register: ModeRegister,
}

impl<S: SerialSink> SonoffL1Light<S> {
    /// Create the light, nothing is sent until the first update
    pub fn new(sink: S, config: &SonoffL1Config) -> Self {
        Self {
            sink,
            baudrate: config.baudrate,
            register: ModeRegister::with_values(
                config.mode,
                Sensitivity::new(config.sensitivity),
                Speed::new(config.speed),
            ),
        }
    }

    /// Configure the UART, call once before sending anything
    pub fn setup(&mut self) -> Result<(), S::Error> {
        #[cfg(feature = "esp32-log")]
        println!("l1: setup at {} baud", self.baudrate);

        self.sink.set_baudrate(self.baudrate)
    }

    /// Current mode and Sync-to-Music parameters
    pub fn register(&self) -> &ModeRegister {
        &self.register
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the UART
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Send the full light state
    pub fn apply_state(
        &mut self,
        snapshot: &LightSnapshot<'_>,
        now: Instant,
    ) -> Result<(), S::Error> {
        #[cfg(feature = "esp32-log")]
        let previous = self.register.mode();

        let command = encode_state(snapshot, &mut self.register, now);

        #[cfg(feature = "esp32-log")]
        if previous != self.register.mode() {
            println!("l1: effect cleared, back to {}", self.register.mode().as_str());
        }

        self.send(&command)
    }

    /// Select a mode and send a mode-only update
    ///
    /// Selecting Sync-to-Music resumes the stored sensitivity and speed.
    pub fn select_mode(&mut self, mode: ModeId, now: Instant) -> Result<(), S::Error> {
        if mode.has_sync_params() {
            let sensitivity = i32::from(self.register.sensitivity().get());
            let speed = i32::from(self.register.speed().get());
            return self.set_mode_sync(sensitivity, speed, now);
        }

        #[cfg(feature = "esp32-log")]
        println!("l1: mode {}", mode.as_str());

        self.register.set_mode(mode);
        let command = encode_mode_only(mode, now);
        self.send(&command)
    }

    /// Select Sync-to-Music with the given parameters
    ///
    /// Out-of-range values are clamped.
    pub fn set_mode_sync(
        &mut self,
        sensitivity: i32,
        speed: i32,
        now: Instant,
    ) -> Result<(), S::Error> {
        self.register.set_sync_mode(sensitivity, speed);
        let (_, sensitivity, speed) = self.register.current();

        #[cfg(feature = "esp32-log")]
        println!("l1: sync to music, sensitivity={} speed={}", sensitivity, speed);

        let command = encode_sync_mode(sensitivity, speed, now);
        self.send(&command)
    }

    /// Select the mode matching an effect label
    ///
    /// "None" and empty labels select the static color mode. Returns `false`
    /// without sending anything if the label is unknown.
    pub fn select_effect(
        &mut self,
        label: Option<&str>,
        now: Instant,
    ) -> Result<bool, S::Error> {
        let mode = if is_static_effect_label(label) {
            Some(ModeId::Colorful)
        } else {
            label.and_then(ModeId::parse_from_str)
        };
        let Some(mode) = mode else {
            return Ok(false);
        };
        self.select_mode(mode, now)?;
        Ok(true)
    }

    pub fn set_mode_colorful(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::Colorful, now)
    }

    pub fn set_mode_colorful_gradient(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::ColorfulGradient, now)
    }

    pub fn set_mode_colorful_breath(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::ColorfulBreath, now)
    }

    pub fn set_mode_diy_gradient(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::DiyGradient, now)
    }

    pub fn set_mode_diy_pulse(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::DiyPulse, now)
    }

    pub fn set_mode_diy_breath(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::DiyBreath, now)
    }

    pub fn set_mode_diy_strobe(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::DiyStrobe, now)
    }

    pub fn set_mode_rgb_gradient(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::RgbGradient, now)
    }

    pub fn set_mode_rgb_pulse(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::RgbPulse, now)
    }

    pub fn set_mode_rgb_breath(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::RgbBreath, now)
    }

    pub fn set_mode_rgb_strobe(&mut self, now: Instant) -> Result<(), S::Error> {
        self.select_mode(ModeId::RgbStrobe, now)
    }

    /// Apply all pending intents in FIFO order (non-blocking)
    ///
    /// Sends one command per intent and returns how many were sent. On a
    /// transport error the failing intent is dropped and the rest stay queued.
    pub fn process_intents<const SIZE: usize>(
        &mut self,
        intents: &IntentReceiver<'_, SIZE>,
        now: Instant,
    ) -> Result<usize, S::Error> {
        let mut sent = 0;
        while let Ok(intent) = intents.try_receive() {
            match intent {
                ModeIntent::Select(mode) => self.select_mode(mode, now)?,
                ModeIntent::Sync { sensitivity, speed } => {
                    self.set_mode_sync(sensitivity, speed, now)?;
                }
            }
            sent += 1;
        }
        Ok(sent)
    }

    fn send(&mut self, command: &Command) -> Result<(), S::Error> {
        #[cfg(feature = "esp32-log")]
        println!("l1: > {}", command.as_str());

        send_command(&mut self.sink, command.as_str())
    }
}

impl<S: SerialSink> LightOutput for SonoffL1Light<S> {
    type Error = S::Error;

    fn traits(&self) -> LightTraits {
        L1_TRAITS
    }

    fn write_state<L: LightStateSource + ?Sized>(
        &mut self,
        state: &L,
        now: Instant,
    ) -> Result<(), Self::Error> {
        let snapshot = LightSnapshot::capture(state);
        self.apply_state(&snapshot, now)
    }
}
