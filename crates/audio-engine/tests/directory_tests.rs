// crates/audio-engine/tests/directory_tests.rs
//! Directory reader tests against the mock backend.
//! Zero unwrap() calls - all errors handled gracefully

use audio_engine::platform::mock::MockAudioSystem;
use audio_engine::{
    list_devices, list_sessions, AudioDevice, AudioSession, DeviceState, EngineError,
    MockProcessTable,
};

fn devices_of(mock: &MockAudioSystem) -> Vec<AudioDevice> {
    match list_devices(mock) {
        Ok(devices) => devices,
        Err(e) => panic!("Device listing failed: {}", e),
    }
}

fn sessions_of(mock: &MockAudioSystem, table: &MockProcessTable) -> Vec<AudioSession> {
    match list_sessions(mock, table) {
        Ok(sessions) => sessions,
        Err(e) => panic!("Session listing failed: {}", e),
    }
}

#[test]
fn test_single_default_device() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.set_default("DEV1");

    let devices = devices_of(&mock);
    assert_eq!(
        devices,
        vec![AudioDevice {
            id: "DEV1".to_string(),
            name: "Speakers".to_string(),
            state: DeviceState::Active,
            is_default: true,
        }]
    );
}

#[test]
fn test_at_most_one_default() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_endpoint("DEV2", "Headphones");
    mock.add_endpoint("DEV3", "HDMI Output");
    mock.set_default("DEV2");

    let devices = devices_of(&mock);
    let default_count = devices.iter().filter(|d| d.is_default).count();
    assert_eq!(default_count, 1, "Should have exactly one default device");
}

#[test]
fn test_no_default_when_platform_reports_none() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_endpoint("DEV2", "Headphones");

    let devices = devices_of(&mock);
    assert_eq!(devices.len(), 2);
    assert!(devices.iter().all(|d| !d.is_default));
}

#[test]
fn test_platform_order_is_preserved() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV2", "Headphones");
    mock.add_endpoint("DEV1", "Speakers");
    mock.set_default("DEV1");

    let devices = devices_of(&mock);
    // No re-sorting, not even default-first
    assert_eq!(devices[0].id, "DEV2");
    assert_eq!(devices[1].id, "DEV1");
}

#[test]
fn test_device_id_uniqueness() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_endpoint("DEV2", "Headphones");
    mock.add_endpoint("DEV3", "HDMI Output");

    let devices = devices_of(&mock);

    let mut ids = std::collections::HashSet::new();
    for device in &devices {
        assert!(ids.insert(device.id.clone()), "Device IDs should be unique");
    }
}

#[test]
fn test_device_listing_is_idempotent() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_endpoint("DEV2", "Headphones");
    mock.set_default("DEV1");

    let first = devices_of(&mock);
    let second = devices_of(&mock);
    assert_eq!(first, second, "Unchanged platform should list identically");
}

#[test]
fn test_empty_platform_yields_empty_list() {
    let mock = MockAudioSystem::new();
    assert!(devices_of(&mock).is_empty());
}

#[test]
fn test_broken_endpoint_entries_are_skipped() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_broken_endpoint("endpoint vanished mid-read");
    mock.add_endpoint("DEV3", "HDMI Output");

    let devices = devices_of(&mock);
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id, "DEV1");
    assert_eq!(devices[1].id, "DEV3");
}

#[test]
fn test_enumeration_failure_is_fatal_for_devices() {
    let mut mock = MockAudioSystem::new();
    mock.fail_enumeration("audio service down");

    assert!(matches!(list_devices(&mock), Err(EngineError::PlatformUnavailable(_))));
}

#[test]
fn test_enumeration_failure_is_fatal_for_sessions() {
    let mut mock = MockAudioSystem::new();
    mock.fail_enumeration("audio service down");
    let table = MockProcessTable::new();

    assert!(matches!(list_sessions(&mock, &table), Err(EngineError::PlatformUnavailable(_))));
}

#[test]
fn test_session_record_shape() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.set_default("DEV1");
    mock.add_session("DEV1", 4321, true, 0.5);
    let mut table = MockProcessTable::new();
    table.insert(4321, "player");

    let sessions = sessions_of(&mock, &table);
    assert_eq!(
        sessions,
        vec![AudioSession {
            process_name: "player".to_string(),
            process_id: 4321,
            device_name: "Speakers".to_string(),
            device_id: "DEV1".to_string(),
            is_playing: true,
            volume: 0.5,
        }]
    );
}

#[test]
fn test_sessions_span_all_endpoints() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_endpoint("DEV2", "Headphones");
    mock.add_session("DEV1", 800, true, 0.8);
    mock.add_session("DEV2", 801, false, 0.4);
    let mut table = MockProcessTable::new();
    table.insert(800, "browser");
    table.insert(801, "player");

    let sessions = sessions_of(&mock, &table);
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].device_name, "Speakers");
    assert_eq!(sessions[1].device_name, "Headphones");
}

#[test]
fn test_no_session_has_process_id_zero() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_session("DEV1", 0, true, 1.0);
    mock.add_session("DEV1", 0, false, 0.5);
    mock.add_session("DEV1", 800, true, 0.8);
    let mut table = MockProcessTable::new();
    table.insert(800, "browser");

    let sessions = sessions_of(&mock, &table);
    assert!(sessions.iter().all(|s| s.process_id != 0));
    assert_eq!(sessions.len(), 1);
}

#[test]
fn test_per_item_failures_never_fail_the_sweep() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_broken_endpoint("hub port 2 dropped");
    mock.add_endpoint("DEV3", "HDMI Output");
    mock.add_session("DEV1", 800, true, 0.8);
    mock.add_broken_session("DEV1", "session expired");
    mock.add_session("DEV3", 801, true, 0.4);
    mock.break_sessions("DEV3", "device detached");
    let mut table = MockProcessTable::new();
    table.insert(800, "browser");

    let sessions = sessions_of(&mock, &table);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].process_id, 800);
}

#[test]
fn test_session_listing_is_idempotent() {
    let mut mock = MockAudioSystem::new();
    mock.add_endpoint("DEV1", "Speakers");
    mock.add_session("DEV1", 800, true, 0.8);
    let mut table = MockProcessTable::new();
    table.insert(800, "browser");

    let first = sessions_of(&mock, &table);
    let second = sessions_of(&mock, &table);
    assert_eq!(first, second);
}
