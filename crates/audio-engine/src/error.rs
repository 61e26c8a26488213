// FILE: crates/audio-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Platform audio unavailable: {0}")]
    PlatformUnavailable(String),

    #[error("Audio item unavailable: {0}")]
    ItemUnavailable(String),

    #[error("Process lookup failed for pid {0}")]
    ProcessLookupFailed(u32),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
