// FILE: crates/cli/src/commands.rs

use anyhow::{Context, Result};
use audio_engine::{AudioBackend, ProcessTable, SystemProcesses};

/// Print the active playback devices as a JSON array.
pub fn list_devices() -> Result<()> {
    let backend = audio_engine::create_backend().context("Failed to open the audio platform")?;
    let output = render_devices(backend.as_ref())?;
    println!("{}", output);
    Ok(())
}

/// Print the live application audio sessions as a JSON array.
pub fn list_sessions() -> Result<()> {
    let backend = audio_engine::create_backend().context("Failed to open the audio platform")?;
    let processes = SystemProcesses::new();
    let output = render_sessions(backend.as_ref(), &processes)?;
    println!("{}", output);
    Ok(())
}

/// Announce the routing placeholder; no routing is performed.
pub fn route(app: &str, device: &str) -> Result<()> {
    println!("{}", route_placeholder(app, device));
    Ok(())
}

fn render_devices(backend: &dyn AudioBackend) -> Result<String> {
    let devices = audio_engine::list_devices(backend).context("Failed to list playback devices")?;
    log::debug!("{} playback devices listed", devices.len());
    audio_engine::to_json(&devices).context("Failed to serialize to JSON")
}

fn render_sessions(backend: &dyn AudioBackend, processes: &dyn ProcessTable) -> Result<String> {
    let sessions = audio_engine::list_sessions(backend, processes)
        .context("Failed to list audio sessions")?;
    log::debug!("{} audio sessions listed", sessions.len());
    audio_engine::to_json(&sessions).context("Failed to serialize to JSON")
}

fn route_placeholder(app: &str, device: &str) -> String {
    format!("Routing \"{}\" to \"{}\" is not implemented yet.", app, device)
}
