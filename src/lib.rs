//! Relocate references to files that were moved, renamed or edited.
//!
//! Given the last known location of a file and a list of candidate files,
//! [`Relinker`] picks the candidate the reference should point to now: one
//! sharing the file's content hash and/or name when possible, otherwise the
//! most similar one by location, name and type, or nothing at all.

pub mod classify;
pub mod config;
pub mod error;
pub mod file_ref;
pub mod hasher;
pub mod matcher;
pub mod paths;
pub mod relink;
pub mod scanner;
pub mod scorer;
pub mod similarity;

pub use config::RelinkConfig;
pub use error::{Error, Result};
pub use file_ref::{FileRef, MissingFile};
pub use matcher::{MatchKind, RelinkMatch, Score, ScoredCandidate};
pub use relink::Relinker;
pub use scorer::{ScoreBreakdown, Scorer};
