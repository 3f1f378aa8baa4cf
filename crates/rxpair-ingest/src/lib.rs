//! Interaction dataset loader for rxpair
//!
//! Reads a JSON array of interaction records:
//!
//! ```text
//! [
//!   { "drugs": ["Sildenafil", "Echinacea"], "severity": "major", "description": "..." },
//!   ...
//! ]
//! ```
//!
//! and builds an [`InteractionIndex`] from it in one pass. Each record gets
//! its zero-based position in the array and a severity rank from the
//! [`SeverityTable`] carried by the [`LoaderConfig`]. Extra fields on a record
//! are ignored. A load either produces a complete index or fails; there is no
//! partially built result.


use rxpair_index::{IndexBuilder, InteractionIndex, SeverityTable};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// What to do with a severity label the table does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSeverityPolicy {
    /// Keep the record with rank 0, below every known severity.
    #[default]
    Lowest,
    /// Fail the whole load.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub severities: SeverityTable,
    pub unknown_severity: UnknownSeverityPolicy,
}

impl LoaderConfig {
    /// Standard severities, rejecting anything else.
    pub fn strict() -> Self {
        Self {
            severities: SeverityTable::standard(),
            unknown_severity: UnknownSeverityPolicy::Reject,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read interaction data: {0}")]
    Read(#[from] io::Error),
    #[error("malformed interaction data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record {position}: expected exactly two drug names, found {found}")]
    MalformedRecord { position: usize, found: usize },
    #[error("record {position}: unrecognized severity `{label}`")]
    UnknownSeverity { position: usize, label: String },
}

// ============================================================================
// Loader
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawInteraction {
    drugs: Vec<String>,
    severity: String,
    description: String,
}

#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: LoaderConfig,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn load_path(&self, path: &Path) -> Result<InteractionIndex, LoadError> {
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        tracing::debug!(path = %path.display(), "opened interaction dataset");

        let mut buf = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut buf)
            .map_err(io_error)?;
        self.load_slice(&buf)
    }

    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<InteractionIndex, LoadError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.load_slice(&buf)
    }

    pub fn load_slice(&self, bytes: &[u8]) -> Result<InteractionIndex, LoadError> {
        let raw: Vec<RawInteraction> = serde_json::from_slice(bytes)?;

        let mut builder = IndexBuilder::with_capacity(raw.len());
        for (position, item) in raw.into_iter().enumerate() {
            let drugs: [String; 2] = item.drugs.try_into().map_err(|drugs: Vec<String>| {
                LoadError::MalformedRecord {
                    position,
                    found: drugs.len(),
                }
            })?;

            let severity = self.config.severities.resolve(&item.severity);
            if !severity.is_known() {
                match self.config.unknown_severity {
                    UnknownSeverityPolicy::Reject => {
                        return Err(LoadError::UnknownSeverity {
                            position,
                            label: item.severity,
                        });
                    }
                    UnknownSeverityPolicy::Lowest => {
                        tracing::warn!(
                            position,
                            label = %item.severity,
                            "unrecognized severity, ranking below all known severities"
                        );
                    }
                }
            }

            if let Some(shadowed) = builder.push(drugs, severity, item.description) {
                tracing::debug!(position, shadowed, "record replaces an earlier entry for the same pair");
            }
        }

        let index = builder.finish();
        tracing::info!(
            records = index.len(),
            pairs = index.distinct_pairs(),
            "interactions read"
        );
        Ok(index)
    }
}

/// Loads `path` with the standard severity table.
pub fn load_path(path: &Path) -> Result<InteractionIndex, LoadError> {
    DatasetLoader::default().load_path(path)
}
