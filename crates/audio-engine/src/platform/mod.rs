// FILE: crates/audio-engine/src/platform/mod.rs

//! Platform audio backend abstraction.
//!
//! Wraps the operating system's audio service behind [`AudioBackend`] so the
//! directory readers stay platform-neutral and testable without hardware.

#[cfg(windows)]
mod windows;

pub mod mock;

use crate::error::{EngineError, EngineResult};
use crate::types::DeviceState;

/// Outcome of reading one entry during an enumeration sweep. A failed entry
/// carries the reason it will be skipped; it never aborts the sweep.
pub type ItemResult<T> = Result<T, EngineError>;

/// Raw playback endpoint entry, before the default-device join.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    pub state: DeviceState,
}

/// Raw audio session entry, before the process-name join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSession {
    pub process_id: u32,
    pub is_active: bool,
    pub volume: f32,
}

/// Scoped connection to the platform audio service.
///
/// One backend instance covers one enumeration pass; dropping it releases
/// every platform handle it acquired, on success and error paths alike.
pub trait AudioBackend {
    /// Active render endpoints, one entry per endpoint the platform
    /// reported.
    fn render_endpoints(&self) -> EngineResult<Vec<ItemResult<Endpoint>>>;

    /// Id of the default multimedia render endpoint, or `None` when the
    /// platform has no default configured.
    fn default_endpoint_id(&self) -> EngineResult<Option<String>>;

    /// Live sessions of one endpoint. An `Err` means the endpoint stopped
    /// answering as a whole; callers skip it and keep enumerating.
    fn endpoint_sessions(
        &self,
        endpoint_id: &str,
    ) -> EngineResult<Vec<ItemResult<EndpointSession>>>;
}

/// Creates the audio backend for the current platform.
///
/// # Errors
///
/// Returns `PlatformUnavailable` if the platform has no supported audio
/// service or the service cannot be reached.
#[allow(unreachable_code)]
pub fn create_backend() -> EngineResult<Box<dyn AudioBackend>> {
    #[cfg(windows)]
    {
        return Ok(Box::new(windows::WindowsAudio::new()?));
    }

    Err(EngineError::PlatformUnavailable("no audio backend for this platform".to_string()))
}
