//! rxpair index
//!
//! Answers one question: given the drugs a patient takes, which single known
//! pairwise interaction among them is the most severe?
//!
//! ```text
//!   dataset records ──► IndexBuilder ──► InteractionIndex ──► worst_interaction
//!   (in file order)     (positions,      (read-only,           (all i<j pairs,
//!                        PairKey map)     shareable)            rank then position)
//! ```
//!
//! ## Ordering
//!
//! - A higher severity rank always wins.
//! - Between equal ranks the record that appeared earlier in the dataset wins.
//! - Drug names are compared case-insensitively and pair order never matters.
//!
//! Severity ranks come from an injected [`SeverityTable`]; labels the table
//! does not know get rank 0 and lose to every known severity.

mod index;
mod pair_key;
mod record;
pub mod report;
pub mod severity;

pub use index::{IndexBuilder, InteractionIndex, QueryError};
pub use pair_key::PairKey;
pub use record::InteractionRecord;
pub use report::{impact_line, NO_INTERACTION};
pub use severity::{Severity, SeverityTable, SeverityTableError, STANDARD_SEVERITIES};
