//! AT command encoding
//!
//! Every command is a single ASCII line of the form
//! `AT+UPDATE="name":value,...` without a trailing newline. The transport
//! appends [`TERMINATOR`] after it.
//!
//! Field order is fixed: `sequence`, `switch`, `light_type`, `colorR`,
//! `colorG`, `colorB`, `bright`, `mode`, `sensitive`, `speed`. Shorter
//! commands keep the same names and relative order.

use core::fmt::{self, Write};

use embassy_time::Instant;
use heapless::String;

use crate::bounds::{Sensitivity, Speed};
use crate::color::MAX_PERCENT;
use crate::mode::{ModeId, ModeRegister};
use crate::sequence::{SequenceToken, decimal_digits};
use crate::state::LightSnapshot;

/// Byte that terminates every command on the wire
pub const TERMINATOR: u8 = 0x1B;

/// Light type tag, the L1 only knows RGB strips
pub const LIGHT_TYPE: u8 = 1;

const COMMAND_PREFIX: &str = "AT+UPDATE=";

const FIELD_SEQUENCE: &str = r#""sequence":"#;
const FIELD_SWITCH: &str = r#","switch":"#;
const FIELD_LIGHT_TYPE: &str = r#","light_type":"#;
const FIELD_COLOR_R: &str = r#","colorR":"#;
const FIELD_COLOR_G: &str = r#","colorG":"#;
const FIELD_COLOR_B: &str = r#","colorB":"#;
const FIELD_BRIGHT: &str = r#","bright":"#;
const FIELD_MODE: &str = r#","mode":"#;
const FIELD_SENSITIVE: &str = r#","sensitive":"#;
const FIELD_SPEED: &str = r#","speed":"#;

const SWITCH_ON: &str = "on";
const SWITCH_OFF: &str = "off";

/// Opening and closing quote of a text value
const QUOTES: usize = 2;

#[allow(clippy::cast_lossless)]
const fn width(value: u8) -> usize {
    decimal_digits(value as u64)
}

const fn max_len(a: &str, b: &str) -> usize {
    if a.len() > b.len() {
        a.len()
    } else {
        b.len()
    }
}

/// Capacity of a command buffer
///
/// Sum of every field at its widest: full update in Sync-to-Music mode at
/// the largest possible sequence token.
pub const COMMAND_CAPACITY: usize = COMMAND_PREFIX.len()
    + FIELD_SEQUENCE.len()
    + QUOTES
    + SequenceToken::MAX_LEN
    + FIELD_SWITCH.len()
    + QUOTES
    + max_len(SWITCH_ON, SWITCH_OFF)
    + FIELD_LIGHT_TYPE.len()
    + width(LIGHT_TYPE)
    + FIELD_COLOR_R.len()
    + FIELD_COLOR_G.len()
    + FIELD_COLOR_B.len()
    + 3 * width(u8::MAX)
    + FIELD_BRIGHT.len()
    + width(MAX_PERCENT)
    + FIELD_MODE.len()
    + width(ModeId::MAX_CODE)
    + FIELD_SENSITIVE.len()
    + width(Sensitivity::MAX)
    + FIELD_SPEED.len()
    + width(Speed::MAX);

/// Encoded command text, without terminator
pub type Command = String<COMMAND_CAPACITY>;

/// Encode a full state update
///
/// If the snapshot has no active effect, the register is reverted to
/// [`ModeId::Colorful`] before encoding. The host clears effects without
/// selecting a mode, so this check runs on every update.
pub fn encode_state(
    snapshot: &LightSnapshot<'_>,
    register: &mut ModeRegister,
    now: Instant,
) -> Command {
    if snapshot.is_static() {
        register.revert_to_static();
    }

    let color = snapshot.color();
    let switch = if snapshot.on { SWITCH_ON } else { SWITCH_OFF };

    let mut command = begin(now);
    push(
        &mut command,
        format_args!(
            r#"{}"{}"{}{}{}{}{}{}{}{}{}{}"#,
            FIELD_SWITCH,
            switch,
            FIELD_LIGHT_TYPE,
            LIGHT_TYPE,
            FIELD_COLOR_R,
            color.r,
            FIELD_COLOR_G,
            color.g,
            FIELD_COLOR_B,
            color.b,
            FIELD_BRIGHT,
            snapshot.brightness_percent(),
        ),
    );
    push_mode(&mut command, register.mode());
    if register.mode().has_sync_params() {
        push_sync_params(&mut command, register.sensitivity(), register.speed());
    }
    command
}

/// Encode an update that only changes the mode
///
/// Color, brightness and power stay untouched on the controller.
/// Sync-to-Music needs its parameters, use [`encode_sync_mode`] for it.
///
/// # Panics
///
/// Panics in debug builds if `mode` is [`ModeId::SyncToMusic`].
pub fn encode_mode_only(mode: ModeId, now: Instant) -> Command {
    debug_assert!(
        !mode.has_sync_params(),
        "Sync-to-Music must be encoded with encode_sync_mode"
    );
    let mut command = begin(now);
    push_mode(&mut command, mode);
    command
}

/// Encode the Sync-to-Music selection with its parameters
pub fn encode_sync_mode(sensitivity: Sensitivity, speed: Speed, now: Instant) -> Command {
    let mut command = begin(now);
    push_mode(&mut command, ModeId::SyncToMusic);
    push_sync_params(&mut command, sensitivity, speed);
    command
}

fn begin(now: Instant) -> Command {
    let mut command = Command::new();
    push(
        &mut command,
        format_args!(
            r#"{}{}"{}""#,
            COMMAND_PREFIX,
            FIELD_SEQUENCE,
            SequenceToken::from_instant(now)
        ),
    );
    command
}

fn push_mode(command: &mut Command, mode: ModeId) {
    push(command, format_args!("{}{}", FIELD_MODE, mode.code()));
}

fn push_sync_params(command: &mut Command, sensitivity: Sensitivity, speed: Speed) {
    push(
        command,
        format_args!(
            "{}{}{}{}",
            FIELD_SENSITIVE, sensitivity, FIELD_SPEED, speed
        ),
    );
}

/// Append formatted fields
///
/// # Panics
///
/// Panics if the command would exceed [`COMMAND_CAPACITY`], which means a
/// field was added without being counted in the capacity.
#[track_caller]
fn push(command: &mut Command, args: fmt::Arguments<'_>) {
    if command.write_fmt(args).is_err() {
        panic!("AT command exceeds {} bytes", COMMAND_CAPACITY);
    }
}
