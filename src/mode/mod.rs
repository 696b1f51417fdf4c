//! Lighting modes of the secondary controller
//!
//! The controller knows twelve fixed patterns, addressed by numeric code.
//! Only Sync-to-Music carries extra parameters.

mod register;

pub use register::ModeRegister;

const MODE_NAME_COLORFUL: &str = "Colorful";
const MODE_NAME_COLORFUL_GRADIENT: &str = "Colorful Gradient";
const MODE_NAME_COLORFUL_BREATH: &str = "Colorful Breath";
const MODE_NAME_DIY_GRADIENT: &str = "DIY Gradient";
const MODE_NAME_DIY_PULSE: &str = "DIY Pulse";
const MODE_NAME_DIY_BREATH: &str = "DIY Breath";
const MODE_NAME_DIY_STROBE: &str = "DIY Strobe";
const MODE_NAME_RGB_GRADIENT: &str = "RGB Gradient";
const MODE_NAME_RGB_PULSE: &str = "RGB Pulse";
const MODE_NAME_RGB_BREATH: &str = "RGB Breath";
const MODE_NAME_RGB_STROBE: &str = "RGB Strobe";
const MODE_NAME_SYNC_TO_MUSIC: &str = "Sync to Music";

const MODE_ID_COLORFUL: u8 = 1;
const MODE_ID_COLORFUL_GRADIENT: u8 = 2;
const MODE_ID_COLORFUL_BREATH: u8 = 3;
const MODE_ID_DIY_GRADIENT: u8 = 4;
const MODE_ID_DIY_PULSE: u8 = 5;
const MODE_ID_DIY_BREATH: u8 = 6;
const MODE_ID_DIY_STROBE: u8 = 7;
const MODE_ID_RGB_GRADIENT: u8 = 8;
const MODE_ID_RGB_PULSE: u8 = 9;
const MODE_ID_RGB_BREATH: u8 = 10;
const MODE_ID_RGB_STROBE: u8 = 11;
const MODE_ID_SYNC_TO_MUSIC: u8 = 12;

/// Effect label the host uses when no effect is active
pub const NO_EFFECT_LABEL: &str = "None";

/// Known mode codes of the L1 AT protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModeId {
    /// Static color
    #[default]
    Colorful = MODE_ID_COLORFUL,
    ColorfulGradient = MODE_ID_COLORFUL_GRADIENT,
    ColorfulBreath = MODE_ID_COLORFUL_BREATH,
    /// Fade in/out of the selected color
    DiyGradient = MODE_ID_DIY_GRADIENT,
    /// Faster fade in/out of the selected color
    DiyPulse = MODE_ID_DIY_PULSE,
    /// On/off toggle of the selected color
    DiyBreath = MODE_ID_DIY_BREATH,
    /// Faster on/off toggle of the selected color
    DiyStrobe = MODE_ID_DIY_STROBE,
    RgbGradient = MODE_ID_RGB_GRADIENT,
    RgbPulse = MODE_ID_RGB_PULSE,
    RgbBreath = MODE_ID_RGB_BREATH,
    RgbStrobe = MODE_ID_RGB_STROBE,
    /// Music reactive mode, uses sensitivity and speed
    SyncToMusic = MODE_ID_SYNC_TO_MUSIC,
}

impl ModeId {
    /// All modes in code order
    pub const ALL: [Self; 12] = [
        Self::Colorful,
        Self::ColorfulGradient,
        Self::ColorfulBreath,
        Self::DiyGradient,
        Self::DiyPulse,
        Self::DiyBreath,
        Self::DiyStrobe,
        Self::RgbGradient,
        Self::RgbPulse,
        Self::RgbBreath,
        Self::RgbStrobe,
        Self::SyncToMusic,
    ];

    /// Highest code the controller accepts
    pub const MAX_CODE: u8 = MODE_ID_SYNC_TO_MUSIC;

    /// Parse a wire code, unknown codes give `None`
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_COLORFUL => Self::Colorful,
            MODE_ID_COLORFUL_GRADIENT => Self::ColorfulGradient,
            MODE_ID_COLORFUL_BREATH => Self::ColorfulBreath,
            MODE_ID_DIY_GRADIENT => Self::DiyGradient,
            MODE_ID_DIY_PULSE => Self::DiyPulse,
            MODE_ID_DIY_BREATH => Self::DiyBreath,
            MODE_ID_DIY_STROBE => Self::DiyStrobe,
            MODE_ID_RGB_GRADIENT => Self::RgbGradient,
            MODE_ID_RGB_PULSE => Self::RgbPulse,
            MODE_ID_RGB_BREATH => Self::RgbBreath,
            MODE_ID_RGB_STROBE => Self::RgbStrobe,
            MODE_ID_SYNC_TO_MUSIC => Self::SyncToMusic,
            _ => return None,
        })
    }

    /// Numeric code sent on the wire
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns if the mode carries sensitivity and speed fields
    pub const fn has_sync_params(self) -> bool {
        matches!(self, Self::SyncToMusic)
    }

    /// Effect label shown by the host
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colorful => MODE_NAME_COLORFUL,
            Self::ColorfulGradient => MODE_NAME_COLORFUL_GRADIENT,
            Self::ColorfulBreath => MODE_NAME_COLORFUL_BREATH,
            Self::DiyGradient => MODE_NAME_DIY_GRADIENT,
            Self::DiyPulse => MODE_NAME_DIY_PULSE,
            Self::DiyBreath => MODE_NAME_DIY_BREATH,
            Self::DiyStrobe => MODE_NAME_DIY_STROBE,
            Self::RgbGradient => MODE_NAME_RGB_GRADIENT,
            Self::RgbPulse => MODE_NAME_RGB_PULSE,
            Self::RgbBreath => MODE_NAME_RGB_BREATH,
            Self::RgbStrobe => MODE_NAME_RGB_STROBE,
            Self::SyncToMusic => MODE_NAME_SYNC_TO_MUSIC,
        }
    }

    /// Find the mode for an effect label, matching is case sensitive
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_COLORFUL => Some(Self::Colorful),
            MODE_NAME_COLORFUL_GRADIENT => Some(Self::ColorfulGradient),
            MODE_NAME_COLORFUL_BREATH => Some(Self::ColorfulBreath),
            MODE_NAME_DIY_GRADIENT => Some(Self::DiyGradient),
            MODE_NAME_DIY_PULSE => Some(Self::DiyPulse),
            MODE_NAME_DIY_BREATH => Some(Self::DiyBreath),
            MODE_NAME_DIY_STROBE => Some(Self::DiyStrobe),
            MODE_NAME_RGB_GRADIENT => Some(Self::RgbGradient),
            MODE_NAME_RGB_PULSE => Some(Self::RgbPulse),
            MODE_NAME_RGB_BREATH => Some(Self::RgbBreath),
            MODE_NAME_RGB_STROBE => Some(Self::RgbStrobe),
            MODE_NAME_SYNC_TO_MUSIC => Some(Self::SyncToMusic),
            _ => None,
        }
    }
}

/// Returns if the effect label means "no effect"
///
/// Absent, empty and `"None"` labels are treated the same way.
pub fn is_static_effect_label(label: Option<&str>) -> bool {
    match label {
        None => true,
        Some(label) => label.is_empty() || label == NO_EFFECT_LABEL,
    }
}
