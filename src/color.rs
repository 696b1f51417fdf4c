//! Conversion of normalized light values to wire integers
//!
//! All conversions truncate with `floor`, they never round.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Largest brightness percent on the wire
pub const MAX_PERCENT: u8 = 100;

/// Convert a channel fraction (0.0-1.0) to 0-255
pub fn channel_from_fraction(fraction: f32) -> u8 {
    scale_floor(fraction, 255.0)
}

/// Convert a brightness fraction (0.0-1.0) to percent 0-100
pub fn percent_from_fraction(fraction: f32) -> u8 {
    scale_floor(fraction, f32::from(MAX_PERCENT))
}

/// Convert RGB fractions to an 8-bit color
pub fn rgb_from_fractions(red: f32, green: f32, blue: f32) -> Rgb {
    Rgb::new(
        channel_from_fraction(red),
        channel_from_fraction(green),
        channel_from_fraction(blue),
    )
}

// NaN passes through `clamp` and saturates to 0 on the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_floor(fraction: f32, max: f32) -> u8 {
    libm::floorf(fraction.clamp(0.0, 1.0) * max) as u8
}
