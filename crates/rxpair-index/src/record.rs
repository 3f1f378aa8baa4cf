use std::cmp::Ordering;

use crate::{PairKey, Severity};

/// One known interaction between two drugs.
///
/// Records are created by [`crate::IndexBuilder`], which assigns
/// `source_position` from the order records are pushed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    drugs: [String; 2],
    severity: Severity,
    description: String,
    source_position: usize,
}

impl InteractionRecord {
    pub(crate) fn new(
        drugs: [String; 2],
        severity: Severity,
        description: String,
        source_position: usize,
    ) -> Self {
        Self {
            drugs,
            severity,
            description,
            source_position,
        }
    }

    /// The two drug names as written in the source data.
    pub fn drugs(&self) -> &[String; 2] {
        &self.drugs
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Zero-based position in the loaded dataset. Only used for tie-breaking.
    pub fn source_position(&self) -> usize {
        self.source_position
    }

    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.drugs[0], &self.drugs[1])
    }

    /// `true` if `self` should replace `other` as the worst interaction:
    /// a higher rank wins, and on equal rank the earlier record wins.
    pub fn outranks(&self, other: &Self) -> bool {
        match self.severity.rank().cmp(&other.severity.rank()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.source_position < other.source_position,
        }
    }
}
