// FILE: crates/audio-engine/src/devices.rs

//! Device directory: active playback endpoints with the default flagged.

use crate::error::EngineResult;
use crate::platform::AudioBackend;
use crate::types::AudioDevice;

/// Lists the active playback endpoints in platform order, marking the
/// system default.
///
/// Endpoint entries the platform could not fully describe are skipped; the
/// listing itself only fails when the enumeration does.
pub fn list_devices(backend: &dyn AudioBackend) -> EngineResult<Vec<AudioDevice>> {
    let default_id = backend.default_endpoint_id()?;
    let entries = backend.render_endpoints()?;

    let mut devices = Vec::with_capacity(entries.len());
    for entry in entries {
        let endpoint = match entry {
            Ok(endpoint) => endpoint,
            Err(e) => {
                log::debug!("Skipping unreadable endpoint: {}", e);
                continue;
            }
        };
        let is_default = default_id.as_deref() == Some(endpoint.id.as_str());
        devices.push(AudioDevice {
            id: endpoint.id,
            name: endpoint.name,
            state: endpoint.state,
            is_default,
        });
    }
    Ok(devices)
}
