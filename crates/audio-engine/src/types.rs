// FILE: crates/audio-engine/src/types.rs

use serde::{Deserialize, Serialize};

/// Lifecycle state of a playback endpoint, carrying the platform's own
/// state names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    Active,
    Disabled,
    NotPresent,
    Unplugged,
}

/// One playback endpoint, as handed to the HyperRoute plugin.
///
/// Field names and casing are a frozen wire contract; renaming any of them
/// breaks the plugin side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioDevice {
    /// Opaque platform identifier, unique within one enumeration.
    pub id: String,
    /// Human-readable device name.
    pub name: String,
    pub state: DeviceState,
    /// Whether this is the system default playback device.
    pub is_default: bool,
}

/// One application audio session bound to a playback endpoint.
///
/// Same wire contract rules as [`AudioDevice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioSession {
    pub process_name: String,
    pub process_id: u32,
    pub device_name: String,
    pub device_id: String,
    /// True while the session is audibly rendering.
    pub is_playing: bool,
    /// Session volume scalar in `[0.0, 1.0]`.
    pub volume: f32,
}
