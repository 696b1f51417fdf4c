//! Sequence tokens used by the controller to order updates
//!
//! A token is the uptime in whole seconds followed by the three-digit
//! millisecond remainder, so 12345 ms becomes `12345` and 5 ms becomes
//! `0005`. Two commands in the same millisecond share a token.

use core::fmt;

use embassy_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SequenceToken {
    seconds: u64,
    millis: u16,
}

impl SequenceToken {
    /// Longest possible token, reached at `u64::MAX` milliseconds
    pub const MAX_LEN: usize = decimal_digits(u64::MAX / 1000) + 3;

    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            seconds: millis / 1000,
            millis: (millis % 1000) as u16,
        }
    }

    pub fn from_instant(now: Instant) -> Self {
        Self::from_millis(now.as_millis())
    }
}

impl fmt::Display for SequenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.seconds, self.millis)
    }
}

/// Number of decimal digits needed to print `value`
pub(crate) const fn decimal_digits(mut value: u64) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
