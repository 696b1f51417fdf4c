//! Bounded parameters of the Sync-to-Music mode
//!
//! Out-of-range values are clamped to the nearest bound, never rejected.

use core::fmt;

/// Microphone sensitivity of the Sync-to-Music mode (1-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Sensitivity used by a freshly started controller
    pub const DEFAULT: Self = Self(Self::MAX);

    /// Create a sensitivity, clamping the value into `MIN..=MAX`
    pub const fn new(value: i32) -> Self {
        Self(clamp(value, Self::MIN, Self::MAX))
    }

    /// Raw value as sent on the wire
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Effect speed of the Sync-to-Music mode (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Speed used by a freshly started controller
    pub const DEFAULT: Self = Self(50);

    /// Create a speed, clamping the value into `MIN..=MAX`
    pub const fn new(value: i32) -> Self {
        Self(clamp(value, Self::MIN, Self::MAX))
    }

    /// Raw value as sent on the wire
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
const fn clamp(value: i32, min: u8, max: u8) -> u8 {
    if value < min as i32 {
        min
    } else if value > max as i32 {
        max
    } else {
        value as u8
    }
}
