// FILE: crates/audio-engine/src/platform/mock.rs

//! Mock audio backend for testing without hardware.

use super::{AudioBackend, Endpoint, EndpointSession, ItemResult};
use crate::error::{EngineError, EngineResult};
use crate::types::DeviceState;
use std::collections::HashMap;

/// An in-memory audio backend serving scripted endpoints and sessions.
///
/// Lets the directory readers and the CLI run without an audio service,
/// which CI machines typically lack. Failures can be injected per entry or
/// for a whole enumeration.
///
/// # Example
///
/// ```
/// use audio_engine::platform::{mock::MockAudioSystem, AudioBackend};
///
/// let mut mock = MockAudioSystem::new();
/// mock.add_endpoint("DEV1", "Speakers");
/// mock.set_default("DEV1");
/// mock.add_session("DEV1", 4321, true, 0.5);
///
/// let endpoints = mock.render_endpoints().unwrap();
/// assert_eq!(endpoints.len(), 1);
/// ```
#[derive(Default)]
pub struct MockAudioSystem {
    endpoints: Vec<Result<Endpoint, String>>,
    default_id: Option<String>,
    sessions: HashMap<String, SessionScript>,
    enumeration_failure: Option<String>,
}

#[derive(Default)]
struct SessionScript {
    unreachable: Option<String>,
    entries: Vec<Result<EndpointSession, String>>,
}

impl MockAudioSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active endpoint.
    pub fn add_endpoint(&mut self, id: &str, name: &str) {
        self.add_endpoint_with_state(id, name, DeviceState::Active);
    }

    /// Adds an endpoint in an explicit state.
    pub fn add_endpoint_with_state(&mut self, id: &str, name: &str, state: DeviceState) {
        self.endpoints.push(Ok(Endpoint {
            id: id.to_string(),
            name: name.to_string(),
            state,
        }));
    }

    /// Adds an endpoint entry that fails to read, as a hot-unplugged device
    /// would mid-enumeration.
    pub fn add_broken_endpoint(&mut self, reason: &str) {
        self.endpoints.push(Err(reason.to_string()));
    }

    /// Marks an endpoint id as the system default.
    pub fn set_default(&mut self, id: &str) {
        self.default_id = Some(id.to_string());
    }

    /// Adds a session to an endpoint.
    pub fn add_session(
        &mut self,
        endpoint_id: &str,
        process_id: u32,
        is_active: bool,
        volume: f32,
    ) {
        self.script_for(endpoint_id).entries.push(Ok(EndpointSession {
            process_id,
            is_active,
            volume,
        }));
    }

    /// Adds a session entry that fails to read.
    pub fn add_broken_session(&mut self, endpoint_id: &str, reason: &str) {
        self.script_for(endpoint_id).entries.push(Err(reason.to_string()));
    }

    /// Makes a whole endpoint stop answering session queries.
    pub fn break_sessions(&mut self, endpoint_id: &str, reason: &str) {
        self.script_for(endpoint_id).unreachable = Some(reason.to_string());
    }

    /// Makes endpoint enumeration itself fail, as when the audio service is
    /// down.
    pub fn fail_enumeration(&mut self, reason: &str) {
        self.enumeration_failure = Some(reason.to_string());
    }

    fn script_for(&mut self, endpoint_id: &str) -> &mut SessionScript {
        self.sessions.entry(endpoint_id.to_string()).or_default()
    }
}

impl AudioBackend for MockAudioSystem {
    fn render_endpoints(&self) -> EngineResult<Vec<ItemResult<Endpoint>>> {
        if let Some(reason) = &self.enumeration_failure {
            return Err(EngineError::PlatformUnavailable(reason.clone()));
        }
        Ok(self
            .endpoints
            .iter()
            .map(|entry| match entry {
                Ok(endpoint) => Ok(endpoint.clone()),
                Err(reason) => Err(EngineError::ItemUnavailable(reason.clone())),
            })
            .collect())
    }

    fn default_endpoint_id(&self) -> EngineResult<Option<String>> {
        Ok(self.default_id.clone())
    }

    fn endpoint_sessions(
        &self,
        endpoint_id: &str,
    ) -> EngineResult<Vec<ItemResult<EndpointSession>>> {
        let script = match self.sessions.get(endpoint_id) {
            Some(script) => script,
            None => return Ok(Vec::new()),
        };
        if let Some(reason) = &script.unreachable {
            return Err(EngineError::ItemUnavailable(reason.clone()));
        }
        Ok(script
            .entries
            .iter()
            .map(|entry| match entry {
                Ok(session) => Ok(*session),
                Err(reason) => Err(EngineError::ItemUnavailable(reason.clone())),
            })
            .collect())
    }
}
