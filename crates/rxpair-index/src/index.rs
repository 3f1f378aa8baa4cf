//! InteractionIndex: pair lookups over the loaded interaction list.
//!
//! The index is two parallel structures describing one logical table:
//!
//! - `records`: the append-only list, in dataset order
//! - `by_pair`: `PairKey -> position in records`
//!
//! Positions double as the tie-break between equally severe interactions, so
//! the list is never reordered once a position has been handed out. When two
//! records share a `PairKey` the later one owns the map slot; the earlier one
//! stays in `records` but is no longer reachable through a lookup.

use std::collections::HashMap;

use thiserror::Error;

use crate::{InteractionRecord, PairKey, Severity};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("insufficient drugs: a query needs at least two names, got {supplied}")]
    InsufficientInput { supplied: usize },
}

/// Append-only construction of an [`InteractionIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    records: Vec<InteractionRecord>,
    by_pair: HashMap<PairKey, usize>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            by_pair: HashMap::with_capacity(capacity),
        }
    }

    /// Appends a record at the next position and points its pair at it.
    ///
    /// Returns the position of the record previously indexed under the same
    /// pair, if any.
    pub fn push(
        &mut self,
        drugs: [String; 2],
        severity: Severity,
        description: impl Into<String>,
    ) -> Option<usize> {
        let position = self.records.len();
        let record = InteractionRecord::new(drugs, severity, description.into(), position);
        let shadowed = self.by_pair.insert(record.pair_key(), position);
        self.records.push(record);
        shadowed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> InteractionIndex {
        InteractionIndex {
            records: self.records,
            by_pair: self.by_pair,
        }
    }
}

/// Read-only interaction table. Safe to share between threads once built.
#[derive(Debug, Clone, Default)]
pub struct InteractionIndex {
    records: Vec<InteractionRecord>,
    by_pair: HashMap<PairKey, usize>,
}

impl InteractionIndex {
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// Every loaded record in dataset order, shadowed duplicates included.
    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct pairs reachable through lookups.
    pub fn distinct_pairs(&self) -> usize {
        self.by_pair.len()
    }

    pub fn get(&self, key: &PairKey) -> Option<&InteractionRecord> {
        self.by_pair.get(key).map(|&pos| &self.records[pos])
    }

    pub fn lookup(&self, a: &str, b: &str) -> Option<&InteractionRecord> {
        self.get(&PairKey::new(a, b))
    }

    /// Indexed pairs with the record each one resolves to, in dataset order.
    pub fn entries(&self) -> Vec<(&PairKey, &InteractionRecord)> {
        let mut out: Vec<(&PairKey, &InteractionRecord)> = self
            .by_pair
            .iter()
            .map(|(key, &pos)| (key, &self.records[pos]))
            .collect();
        out.sort_by_key(|(_, record)| record.source_position());
        out
    }

    /// The single most severe interaction among all pairs of `drugs`.
    ///
    /// Every `i < j` pair of the input is looked up; names are not
    /// deduplicated and pairs without an entry are skipped. Among the matches
    /// the highest rank wins, then the earliest dataset position. Returns
    /// `Ok(None)` when no pair matched.
    pub fn worst_interaction<S: AsRef<str>>(
        &self,
        drugs: &[S],
    ) -> Result<Option<&InteractionRecord>, QueryError> {
        if drugs.len() < 2 {
            return Err(QueryError::InsufficientInput {
                supplied: drugs.len(),
            });
        }

        let names: Vec<String> = drugs.iter().map(|d| d.as_ref().to_lowercase()).collect();

        let mut best: Option<&InteractionRecord> = None;
        for (i, first) in names.iter().enumerate() {
            for second in &names[i + 1..] {
                let Some(candidate) = self.get(&PairKey::from_lowercase(first, second)) else {
                    continue;
                };
                if best.map_or(true, |current| candidate.outranks(current)) {
                    best = Some(candidate);
                }
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeverityTable;

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    fn demo_index() -> InteractionIndex {
        let table = SeverityTable::standard();
        let mut builder = InteractionIndex::builder();
        builder.push(pair("Aspirin", "Warfarin"), table.resolve("moderate"), "AW moderate");
        builder.push(pair("Warfarin", "Fluconazole"), table.resolve("major"), "WF major");
        builder.push(pair("Aspirin", "Ibuprofen"), table.resolve("moderate"), "AI moderate");
        builder.push(pair("Fluconazole", "Ibuprofen"), table.resolve("minor"), "FI minor");
        builder.push(pair("Ibuprofen", "Warfarin"), table.resolve("major"), "IW major");
        builder.finish()
    }

    #[test]
    fn severity_dominates_position() {
        let index = demo_index();
        let worst = index
            .worst_interaction(&["aspirin", "warfarin", "fluconazole"])
            .unwrap()
            .unwrap();
        assert_eq!(worst.description(), "WF major");
    }

    #[test]
    fn major_tie_prefers_earliest_record() {
        let index = demo_index();
        // AW (pos 0) and AI (pos 2) are both moderate; IW (pos 4) is major.
        let worst = index
            .worst_interaction(&["ibuprofen", "aspirin", "warfarin"])
            .unwrap()
            .unwrap();
        assert_eq!(worst.description(), "IW major");

        let worst = index
            .worst_interaction(&["ibuprofen", "aspirin", "warfarin", "fluconazole"])
            .unwrap()
            .unwrap();
        assert_eq!(worst.description(), "WF major");
        assert_eq!(worst.source_position(), 1);

        let worst = index
            .worst_interaction(&["ibuprofen", "warfarin", "aspirin"])
            .unwrap()
            .unwrap();
        assert_eq!(worst.source_position(), 4);
    }

    #[test]
    fn moderate_tie_is_broken_by_position() {
        let table = SeverityTable::standard();
        let mut builder = InteractionIndex::builder();
        builder.push(pair("b", "c"), table.resolve("moderate"), "first");
        builder.push(pair("a", "b"), table.resolve("moderate"), "second");
        let index = builder.finish();

        for query in [["a", "b", "c"], ["c", "b", "a"], ["b", "a", "c"]] {
            let worst = index.worst_interaction(&query).unwrap().unwrap();
            assert_eq!(worst.description(), "first", "query {query:?}");
        }
    }

    #[test]
    fn fewer_than_two_names_is_insufficient() {
        let index = demo_index();
        let empty: [&str; 0] = [];
        assert_eq!(
            index.worst_interaction(&empty),
            Err(QueryError::InsufficientInput { supplied: 0 })
        );
        assert_eq!(
            index.worst_interaction(&["warfarin"]),
            Err(QueryError::InsufficientInput { supplied: 1 })
        );
    }

    #[test]
    fn unmatched_pairs_yield_none() {
        let index = demo_index();
        assert_eq!(index.worst_interaction(&["abc", "xyz"]), Ok(None));
        assert_eq!(index.worst_interaction(&["abc", "warfarin"]), Ok(None));
    }

    #[test]
    fn repeated_names_still_pair_with_others() {
        let index = demo_index();
        let worst = index
            .worst_interaction(&["warfarin", "warfarin", "aspirin"])
            .unwrap()
            .unwrap();
        assert_eq!(worst.description(), "AW moderate");
    }

    #[test]
    fn later_duplicate_pair_overwrites_earlier() {
        let table = SeverityTable::standard();
        let mut builder = InteractionIndex::builder();
        assert_eq!(
            builder.push(pair("Doxepin", "Tramadol"), table.resolve("major"), "old"),
            None
        );
        assert_eq!(
            builder.push(pair("tramadol", "DOXEPIN"), table.resolve("minor"), "new"),
            Some(0)
        );
        let index = builder.finish();

        assert_eq!(index.len(), 2);
        assert_eq!(index.distinct_pairs(), 1);
        let hit = index.lookup("doxepin", "tramadol").unwrap();
        assert_eq!(hit.description(), "new");
        assert_eq!(hit.source_position(), 1);

        let entries = index.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.description(), "new");
    }

    #[test]
    fn unknown_severity_loses_to_any_known_severity() {
        let table = SeverityTable::standard();
        let mut builder = InteractionIndex::builder();
        builder.push(pair("a", "b"), table.resolve("severe"), "unranked");
        builder.push(pair("b", "c"), table.resolve("minor"), "minor");
        let index = builder.finish();

        let worst = index.worst_interaction(&["a", "b", "c"]).unwrap().unwrap();
        assert_eq!(worst.description(), "minor");

        let only_unknown = index.worst_interaction(&["a", "b"]).unwrap().unwrap();
        assert!(!only_unknown.severity().is_known());
    }

    #[test]
    fn entries_follow_dataset_order() {
        let index = demo_index();
        let positions: Vec<usize> = index
            .entries()
            .iter()
            .map(|(_, record)| record.source_position())
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn concurrent_readers_share_one_index() {
        let index = demo_index();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        index
                            .worst_interaction(&["aspirin", "fluconazole", "warfarin"])
                            .unwrap()
                            .map(|r| r.source_position())
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Some(1));
            }
        });
    }
}
