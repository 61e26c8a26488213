//! Audio Engine - playback device and session queries for HyperRoute

mod devices;
mod error;
mod process;
mod sessions;
mod types;
mod wire;

pub mod platform;

pub use devices::list_devices;
pub use error::{EngineError, EngineResult};
pub use platform::{create_backend, AudioBackend, Endpoint, EndpointSession, ItemResult};
pub use process::{MockProcessTable, ProcessTable, SystemProcesses};
pub use sessions::list_sessions;
pub use types::{AudioDevice, AudioSession, DeviceState};
pub use wire::to_json;
