//! Persisted stopwatch snapshot

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What survives a restart: the elapsed milliseconds.
///
/// Stored as base64 of the JSON object `{"e": <ms>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    #[serde(rename = "e")]
    pub elapsed: u64,
}

impl PersistedSnapshot {
    pub fn new(elapsed: u64) -> Self {
        Self { elapsed }
    }

    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(STANDARD.encode(json))
    }

    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        let json = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&json)?)
    }
}
