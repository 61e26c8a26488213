// FILE: crates/audio-engine/src/platform/windows.rs

//! Core Audio backend.
//!
//! Talks to the MMDevice and audio-session COM APIs. Every interface is a
//! reference-counted smart pointer released when it leaves scope, and the
//! COM apartment itself is torn down when the backend drops.

use super::{AudioBackend, Endpoint, EndpointSession, ItemResult};
use crate::error::{EngineError, EngineResult};
use crate::types::DeviceState;
use std::ffi::c_void;
use windows::core::{Interface, PCWSTR, PWSTR};
use windows::Win32::Devices::FunctionDiscovery::PKEY_Device_FriendlyName;
use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::Media::Audio::{
    eMultimedia, eRender, AudioSessionStateActive, IAudioSessionControl2,
    IAudioSessionEnumerator, IAudioSessionManager2, IMMDevice, IMMDeviceCollection,
    IMMDeviceEnumerator, ISimpleAudioVolume, MMDeviceEnumerator, DEVICE_STATE_ACTIVE,
    DEVICE_STATE_DISABLED, DEVICE_STATE_NOTPRESENT, DEVICE_STATE_UNPLUGGED,
};
use windows::Win32::System::Com::StructuredStorage::PropVariantToStringAlloc;
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoTaskMemFree, CoUninitialize, CLSCTX_ALL,
    COINIT_MULTITHREADED, STGM_READ,
};

/// Owns the thread's COM apartment for the lifetime of one backend.
struct ComGuard {
    owns_com: bool,
}

impl ComGuard {
    fn new() -> EngineResult<Self> {
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
        // S_FALSE and RPC_E_CHANGED_MODE both mean the thread already has a
        // usable apartment; only an init we performed pairs with
        // CoUninitialize on drop.
        if hr.is_err() && hr != RPC_E_CHANGED_MODE {
            return Err(EngineError::PlatformUnavailable(format!(
                "COM initialization failed: {}",
                windows::core::Error::from(hr)
            )));
        }
        Ok(Self {
            owns_com: hr.is_ok(),
        })
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.owns_com {
            unsafe { CoUninitialize() };
        }
    }
}

/// Windows audio backend over the MMDevice enumerator.
///
/// Field order matters: the enumerator must be released before the
/// apartment guard runs CoUninitialize.
pub struct WindowsAudio {
    enumerator: IMMDeviceEnumerator,
    _com: ComGuard,
}

impl WindowsAudio {
    pub fn new() -> EngineResult<Self> {
        let com = ComGuard::new()?;
        let created: windows::core::Result<IMMDeviceEnumerator> =
            unsafe { CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL) };
        let enumerator = created.map_err(|e| {
            EngineError::PlatformUnavailable(format!("device enumerator unavailable: {}", e))
        })?;
        Ok(Self {
            enumerator,
            _com: com,
        })
    }

    fn device_by_id(&self, endpoint_id: &str) -> EngineResult<IMMDevice> {
        let wide: Vec<u16> = endpoint_id.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe { self.enumerator.GetDevice(PCWSTR(wide.as_ptr())) }.map_err(|e| {
            EngineError::ItemUnavailable(format!("endpoint {} unavailable: {}", endpoint_id, e))
        })
    }
}

impl AudioBackend for WindowsAudio {
    fn render_endpoints(&self) -> EngineResult<Vec<ItemResult<Endpoint>>> {
        let collection = unsafe { self.enumerator.EnumAudioEndpoints(eRender, DEVICE_STATE_ACTIVE) }
            .map_err(|e| {
                EngineError::PlatformUnavailable(format!("endpoint enumeration failed: {}", e))
            })?;
        let count = unsafe { collection.GetCount() }.map_err(|e| {
            EngineError::PlatformUnavailable(format!("endpoint count unavailable: {}", e))
        })?;

        let mut endpoints = Vec::with_capacity(count as usize);
        for index in 0..count {
            endpoints.push(read_endpoint(&collection, index));
        }
        Ok(endpoints)
    }

    fn default_endpoint_id(&self) -> EngineResult<Option<String>> {
        let device = match unsafe {
            self.enumerator.GetDefaultAudioEndpoint(eRender, eMultimedia)
        } {
            Ok(device) => device,
            Err(e) => {
                log::debug!("No default render endpoint: {}", e);
                return Ok(None);
            }
        };
        match device_id(&device) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                log::debug!("Default endpoint id unreadable: {}", e);
                Ok(None)
            }
        }
    }

    fn endpoint_sessions(
        &self,
        endpoint_id: &str,
    ) -> EngineResult<Vec<ItemResult<EndpointSession>>> {
        let device = self.device_by_id(endpoint_id)?;
        let manager: IAudioSessionManager2 = unsafe { device.Activate(CLSCTX_ALL, None) }
            .map_err(|e| {
                EngineError::ItemUnavailable(format!("session manager unavailable: {}", e))
            })?;
        let sessions = unsafe { manager.GetSessionEnumerator() }.map_err(|e| {
            EngineError::ItemUnavailable(format!("session enumerator unavailable: {}", e))
        })?;
        let count = unsafe { sessions.GetCount() }.map_err(|e| {
            EngineError::ItemUnavailable(format!("session count unavailable: {}", e))
        })?;

        let mut entries = Vec::with_capacity(count.max(0) as usize);
        for index in 0..count {
            entries.push(read_session(&sessions, index));
        }
        Ok(entries)
    }
}

fn read_endpoint(collection: &IMMDeviceCollection, index: u32) -> ItemResult<Endpoint> {
    let device = unsafe { collection.Item(index) }
        .map_err(|e| EngineError::ItemUnavailable(format!("endpoint {}: {}", index, e)))?;
    let id = device_id(&device)?;
    let name = friendly_name(&device)?;
    let state = device_state(&device)?;
    Ok(Endpoint { id, name, state })
}

fn read_session(sessions: &IAudioSessionEnumerator, index: i32) -> ItemResult<EndpointSession> {
    let control = unsafe { sessions.GetSession(index) }
        .map_err(|e| EngineError::ItemUnavailable(format!("session {}: {}", index, e)))?;
    let extended: IAudioSessionControl2 = control.cast().map_err(|e| {
        EngineError::ItemUnavailable(format!("session {} control unavailable: {}", index, e))
    })?;
    let process_id = unsafe { extended.GetProcessId() }.map_err(|e| {
        EngineError::ItemUnavailable(format!("session {} pid unavailable: {}", index, e))
    })?;
    let state = unsafe { control.GetState() }.map_err(|e| {
        EngineError::ItemUnavailable(format!("session {} state unavailable: {}", index, e))
    })?;
    let volume: ISimpleAudioVolume = control.cast().map_err(|e| {
        EngineError::ItemUnavailable(format!("session {} volume unavailable: {}", index, e))
    })?;
    let volume = unsafe { volume.GetMasterVolume() }.map_err(|e| {
        EngineError::ItemUnavailable(format!("session {} volume unreadable: {}", index, e))
    })?;

    Ok(EndpointSession {
        process_id,
        is_active: state == AudioSessionStateActive,
        volume,
    })
}

fn device_id(device: &IMMDevice) -> ItemResult<String> {
    let id = unsafe { device.GetId() }
        .map_err(|e| EngineError::ItemUnavailable(format!("endpoint id unavailable: {}", e)))?;
    unsafe { take_com_string(id) }
}

fn friendly_name(device: &IMMDevice) -> ItemResult<String> {
    let store = unsafe { device.OpenPropertyStore(STGM_READ) }.map_err(|e| {
        EngineError::ItemUnavailable(format!("property store unavailable: {}", e))
    })?;
    let value = unsafe { store.GetValue(&PKEY_Device_FriendlyName) }.map_err(|e| {
        EngineError::ItemUnavailable(format!("friendly name unavailable: {}", e))
    })?;
    let text = unsafe { PropVariantToStringAlloc(&value) }.map_err(|e| {
        EngineError::ItemUnavailable(format!("friendly name unreadable: {}", e))
    })?;
    unsafe { take_com_string(text) }
}

fn device_state(device: &IMMDevice) -> ItemResult<DeviceState> {
    let state = unsafe { device.GetState() }.map_err(|e| {
        EngineError::ItemUnavailable(format!("endpoint state unavailable: {}", e))
    })?;
    match state {
        DEVICE_STATE_ACTIVE => Ok(DeviceState::Active),
        DEVICE_STATE_DISABLED => Ok(DeviceState::Disabled),
        DEVICE_STATE_NOTPRESENT => Ok(DeviceState::NotPresent),
        DEVICE_STATE_UNPLUGGED => Ok(DeviceState::Unplugged),
        other => Err(EngineError::ItemUnavailable(format!(
            "unrecognized endpoint state: {:?}",
            other
        ))),
    }
}

/// Copies a COM-allocated wide string and frees the allocation.
unsafe fn take_com_string(value: PWSTR) -> ItemResult<String> {
    let text = value
        .to_string()
        .map_err(|e| EngineError::ItemUnavailable(format!("malformed UTF-16 string: {}", e)));
    CoTaskMemFree(Some(value.0 as *const c_void));
    text
}
