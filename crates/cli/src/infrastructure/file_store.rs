//! File-backed scenario storage.
//!
//! Writes go to a temporary file in the target's directory which is then
//! renamed over the target, so a failed save never leaves a half-written
//! scenario behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tactica_domain::Scenario;
use tactica_shared::{encode, DecodeOptions, Decoded, Decoder};
use tempfile::NamedTempFile;

use crate::infrastructure::ports::{ResultRecord, ResultSink, ScenarioRepo, StoreError};

pub struct FileScenarioStore {
    decoder: Decoder,
    pretty: bool,
}

impl FileScenarioStore {
    pub fn new(options: DecodeOptions, pretty: bool) -> Self {
        Self {
            decoder: Decoder::new(options),
            pretty,
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T, path: &Path) -> Result<(), StoreError> {
        let mut text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        text.push('\n');
        write_atomically(path, text.as_bytes())
    }
}

impl Default for FileScenarioStore {
    fn default() -> Self {
        Self::new(DecodeOptions::default(), true)
    }
}

impl ScenarioRepo for FileScenarioStore {
    fn load(&self, path: &Path) -> Result<Decoded, StoreError> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let document: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::parse(path, e))?;
        let decoded = self
            .decoder
            .decode_with_report(&document)
            .map_err(|e| StoreError::schema(path, e))?;

        for warning in &decoded.warnings {
            tracing::warn!(path = %path.display(), %warning, "Scenario read with loss");
        }
        tracing::info!(
            path = %path.display(),
            title = decoded.scenario.title(),
            teams = decoded.scenario.teams().len(),
            "Loaded scenario"
        );
        Ok(decoded)
    }

    fn save(&self, scenario: &Scenario, path: &Path) -> Result<(), StoreError> {
        self.write_json(&encode(scenario), path)?;
        tracing::info!(path = %path.display(), title = scenario.title(), "Saved scenario");
        Ok(())
    }
}

impl ResultSink for FileScenarioStore {
    fn publish(&self, record: &ResultRecord, path: &Path) -> Result<(), StoreError> {
        self.write_json(record, path)?;
        tracing::info!(path = %path.display(), correct = record.correct, "Wrote result record");
        Ok(())
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
