use super::ModeId;
use crate::bounds::{Sensitivity, Speed};

/// Currently active mode and the Sync-to-Music parameters
///
/// Sensitivity and speed keep their last values while another mode is
/// active, so re-entering Sync-to-Music resumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRegister {
    mode: ModeId,
    sensitivity: Sensitivity,
    speed: Speed,
}

impl ModeRegister {
    pub const fn new() -> Self {
        Self {
            mode: ModeId::Colorful,
            sensitivity: Sensitivity::DEFAULT,
            speed: Speed::DEFAULT,
        }
    }

    /// Create a register with explicit initial values
    pub const fn with_values(mode: ModeId, sensitivity: Sensitivity, speed: Speed) -> Self {
        Self {
            mode,
            sensitivity,
            speed,
        }
    }

    /// Set the active mode, keeping sensitivity and speed
    pub fn set_mode(&mut self, mode: ModeId) {
        self.mode = mode;
    }

    /// Switch to Sync-to-Music with clamped parameters
    pub fn set_sync_mode(&mut self, sensitivity: i32, speed: i32) {
        self.sensitivity = Sensitivity::new(sensitivity);
        self.speed = Speed::new(speed);
        self.mode = ModeId::SyncToMusic;
    }

    /// Force the static color mode
    ///
    /// Returns `true` if the mode was changed.
    pub fn revert_to_static(&mut self) -> bool {
        let changed = self.mode != ModeId::Colorful;
        self.mode = ModeId::Colorful;
        changed
    }

    pub const fn current(&self) -> (ModeId, Sensitivity, Speed) {
        (self.mode, self.sensitivity, self.speed)
    }

    pub const fn mode(&self) -> ModeId {
        self.mode
    }

    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub const fn speed(&self) -> Speed {
        self.speed
    }
}

impl Default for ModeRegister {
    fn default() -> Self {
        Self::new()
    }
}
