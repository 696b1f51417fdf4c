//! Light state as seen by the driver
//!
//! The host owns the light state; the driver only reads it.

use crate::color::{Rgb, percent_from_fraction, rgb_from_fractions};
use crate::mode::is_static_effect_label;

/// Read-only view of the host light state
pub trait LightStateSource {
    /// Name of the active effect, if any
    fn effect_label(&self) -> Option<&str>;

    /// Current color as fractions (0.0-1.0)
    fn rgb(&self) -> (f32, f32, f32);

    /// Whether the light is switched on
    fn is_on(&self) -> bool;

    /// Current brightness as fraction (0.0-1.0)
    fn brightness(&self) -> f32;
}

/// Plain light state, captured from a [`LightStateSource`] or built directly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSnapshot<'a> {
    pub on: bool,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub brightness: f32,
    pub effect: Option<&'a str>,
}

impl<'a> LightSnapshot<'a> {
    /// Capture the current state of a source
    pub fn capture<S: LightStateSource + ?Sized>(source: &'a S) -> Self {
        let (red, green, blue) = source.rgb();
        Self {
            on: source.is_on(),
            red,
            green,
            blue,
            brightness: source.brightness(),
            effect: source.effect_label(),
        }
    }

    /// Returns if no effect is active
    pub fn is_static(&self) -> bool {
        is_static_effect_label(self.effect)
    }

    /// Color converted to 0-255 channels
    pub fn color(&self) -> Rgb {
        rgb_from_fractions(self.red, self.green, self.blue)
    }

    /// Brightness converted to percent
    pub fn brightness_percent(&self) -> u8 {
        percent_from_fraction(self.brightness)
    }
}

impl LightStateSource for LightSnapshot<'_> {
    fn effect_label(&self) -> Option<&str> {
        self.effect
    }

    fn rgb(&self) -> (f32, f32, f32) {
        (self.red, self.green, self.blue)
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn brightness(&self) -> f32 {
        self.brightness
    }
}
