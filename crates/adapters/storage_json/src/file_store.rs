//! Rule store backed by a JSON file on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use thermohub_app::ports::RuleStore;
use thermohub_domain::error::ThermoError;
use thermohub_domain::rules::RuleSet;

use crate::error::StorageError;

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Path of the rules file (e.g. `config/rules.json`).
    pub rules_path: PathBuf,
}

impl Config {
    /// Build a [`JsonFileRuleStore`] from this configuration.
    ///
    /// A missing file is not an error here: every load fails with
    /// [`ThermoError::StorageUnavailable`] until it exists.
    #[must_use]
    pub fn build(self) -> JsonFileRuleStore {
        if !self.rules_path.exists() {
            tracing::warn!(path = %self.rules_path.display(), "rules file does not exist yet");
        }
        JsonFileRuleStore::new(self.rules_path)
    }
}

/// [`RuleStore`] reading and rewriting one JSON file.
///
/// Saves are pretty-printed with a one-space indent and written to a
/// sibling temporary file that is then renamed over the original, so a
/// reader sees either the old or the new content.
#[derive(Debug, Clone)]
pub struct JsonFileRuleStore {
    path: PathBuf,
}

impl JsonFileRuleStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("rules"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<RuleSet, StorageError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write(&self, rules: &RuleSet) -> Result<(), StorageError> {
        let bytes = to_pretty_json(rules)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes).await?;
        if let Err(err) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(err.into());
        }
        Ok(())
    }
}

impl RuleStore for JsonFileRuleStore {
    async fn load(&self) -> Result<RuleSet, ThermoError> {
        self.read().await.map_err(|err| {
            tracing::debug!(path = %self.path.display(), error = %err, "failed to load rules");
            err.into()
        })
    }

    async fn save(&self, rules: &RuleSet) -> Result<(), ThermoError> {
        self.write(rules).await?;
        tracing::debug!(path = %self.path.display(), "rules saved");
        Ok(())
    }
}

/// Serialize with a one-space indent, fields in declaration order.
fn to_pretty_json(rules: &RuleSet) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    rules.serialize(&mut serializer)?;
    Ok(buf)
}
