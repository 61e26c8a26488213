// FILE: crates/audio-engine/src/sessions.rs

//! Session directory: per-application audio sessions across all active
//! playback endpoints.

use crate::error::{EngineError, EngineResult};
use crate::platform::AudioBackend;
use crate::process::ProcessTable;
use crate::types::AudioSession;

/// Lists the live application audio sessions on every active playback
/// endpoint.
///
/// A session whose process has already exited, or whose endpoint stopped
/// answering, is skipped; only the initial endpoint enumeration can fail
/// the call.
pub fn list_sessions(
    backend: &dyn AudioBackend,
    processes: &dyn ProcessTable,
) -> EngineResult<Vec<AudioSession>> {
    let entries = backend.render_endpoints()?;

    let mut sessions = Vec::new();
    for entry in entries {
        let endpoint = match entry {
            Ok(endpoint) => endpoint,
            Err(e) => {
                log::debug!("Skipping unreadable endpoint: {}", e);
                continue;
            }
        };

        let endpoint_sessions = match backend.endpoint_sessions(&endpoint.id) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("Skipping sessions of endpoint {}: {}", endpoint.id, e);
                continue;
            }
        };

        for session_entry in endpoint_sessions {
            let session = match session_entry {
                Ok(session) => session,
                Err(e) => {
                    log::debug!("Skipping unreadable session on {}: {}", endpoint.id, e);
                    continue;
                }
            };
            // System sound sessions carry no process.
            if session.process_id == 0 {
                continue;
            }
            let process_name = match processes.name_of(session.process_id) {
                Some(name) => name,
                None => {
                    log::debug!(
                        "Skipping session on {}: {}",
                        endpoint.id,
                        EngineError::ProcessLookupFailed(session.process_id)
                    );
                    continue;
                }
            };
            sessions.push(AudioSession {
                process_name,
                process_id: session.process_id,
                device_name: endpoint.name.clone(),
                device_id: endpoint.id.clone(),
                is_playing: session.is_active,
                volume: session.volume,
            });
        }
    }
    Ok(sessions)
}
