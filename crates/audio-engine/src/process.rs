// FILE: crates/audio-engine/src/process.rs

//! Process table lookups for the session join.

use std::collections::HashMap;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Maps process ids to process names.
pub trait ProcessTable {
    /// Name of the process owning `pid`, or `None` once the process is gone.
    fn name_of(&self, pid: u32) -> Option<String>;
}

/// Process table backed by one snapshot of the operating system's process
/// list, taken at construction.
pub struct SystemProcesses {
    system: System,
}

impl SystemProcesses {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_processes(ProcessRefreshKind::everything());
        Self {
            system: System::new_with_specifics(refresh),
        }
    }
}

impl Default for SystemProcesses {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SystemProcesses {
    fn name_of(&self, pid: u32) -> Option<String> {
        self.system
            .process(Pid::from_u32(pid))
            .map(|process| process.name().to_string_lossy().to_string())
    }
}

/// In-memory process table for tests.
#[derive(Default)]
pub struct MockProcessTable {
    names: HashMap<u32, String>,
}

impl MockProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pid: u32, name: &str) {
        self.names.insert(pid, name.to_string());
    }
}

impl ProcessTable for MockProcessTable {
    fn name_of(&self, pid: u32) -> Option<String> {
        self.names.get(&pid).cloned()
    }
}
