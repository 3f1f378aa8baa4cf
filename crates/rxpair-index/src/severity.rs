//! Severity labels and the rank table that orders them.
//!
//! The table is plain configuration: it is built once, handed to the loader
//! and never mutated. Labels are matched case-insensitively. Rank `0` is
//! reserved for labels the table does not know.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The label set of the reference interaction dataset.
pub const STANDARD_SEVERITIES: [(&str, u8); 3] = [("major", 3), ("moderate", 2), ("minor", 1)];

/// Rank given to labels that are missing from the table.
pub const UNRANKED: u8 = 0;

/// A severity label as written in the dataset, together with its rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Severity {
    label: String,
    rank: u8,
}

impl Severity {
    pub fn new(label: impl Into<String>, rank: u8) -> Self {
        Self {
            label: label.into(),
            rank,
        }
    }

    /// The label exactly as it appeared in the source data.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// `false` for labels the table did not recognise.
    pub fn is_known(&self) -> bool {
        self.rank > UNRANKED
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.label)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeverityTableError {
    #[error("severity `{label}` has rank 0, which is reserved for unrecognized labels")]
    ZeroRank { label: String },
    #[error("severity `{label}` is listed more than once")]
    Duplicate { label: String },
    #[error("severity table is empty")]
    Empty,
}

/// Immutable `label -> rank` lookup.
///
/// Deserializes from a JSON object such as `{"major": 3, "minor": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct SeverityTable {
    ranks: BTreeMap<String, u8>,
}

impl SeverityTable {
    /// `{major: 3, moderate: 2, minor: 1}`.
    pub fn standard() -> Self {
        Self {
            ranks: STANDARD_SEVERITIES
                .iter()
                .map(|(label, rank)| (label.to_string(), *rank))
                .collect(),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SeverityTableError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        let mut ranks = BTreeMap::new();
        for (label, rank) in pairs {
            let label = label.as_ref().to_lowercase();
            if rank == UNRANKED {
                return Err(SeverityTableError::ZeroRank { label });
            }
            if ranks.insert(label.clone(), rank).is_some() {
                return Err(SeverityTableError::Duplicate { label });
            }
        }
        if ranks.is_empty() {
            return Err(SeverityTableError::Empty);
        }
        Ok(Self { ranks })
    }

    pub fn rank_of(&self, label: &str) -> Option<u8> {
        self.ranks.get(&label.to_lowercase()).copied()
    }

    /// Resolves `label`; labels missing from the table get [`UNRANKED`].
    pub fn resolve(&self, label: &str) -> Severity {
        Severity::new(label, self.rank_of(label).unwrap_or(UNRANKED))
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, u8)> {
        self.ranks.iter().map(|(label, rank)| (label.as_str(), *rank))
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<String, u8>> for SeverityTable {
    type Error = SeverityTableError;

    fn try_from(value: BTreeMap<String, u8>) -> Result<Self, Self::Error> {
        Self::from_pairs(value)
    }
}

impl From<SeverityTable> for BTreeMap<String, u8> {
    fn from(value: SeverityTable) -> Self {
        value.ranks
    }
}
