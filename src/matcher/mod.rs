//! Selection policies that turn a candidate set into one best candidate.

mod exact;
mod fuzzy;

pub use exact::ExactMatcher;
pub use fuzzy::FuzzyMatcher;

use crate::file_ref::FileRef;
use std::fmt;

/// Which signal selected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Same content hash and same file name.
    HashAndName,
    /// Same content hash, name ignored.
    Hash,
    /// Same file name, no hash available or none matched.
    Name,
    /// Composite similarity at or above the threshold.
    Similarity,
}

impl MatchKind {
    pub fn is_exact(self) -> bool {
        !matches!(self, MatchKind::Similarity)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchKind::HashAndName => "hash and name",
            MatchKind::Hash => "hash",
            MatchKind::Name => "name",
            MatchKind::Similarity => "similarity",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Path distance to the missing file, lower is closer.
    Distance(usize),
    /// Composite index, higher is more similar.
    Similarity(f64),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Distance(d) => write!(f, "distance {}", d),
            Score::Similarity(s) => write!(f, "index {:.3}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'c> {
    pub file: &'c FileRef,
    pub score: Score,
}

/// The candidate a missing file should be relinked to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelinkMatch<'c> {
    pub file: &'c FileRef,
    pub kind: MatchKind,
    pub score: Score,
}
