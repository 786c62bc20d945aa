//! Pure per-signal comparisons between two files.
//!
//! Each primitive looks at one aspect of a pair: where the files live, what
//! they are called and what kind of data they hold. [`crate::scorer`]
//! combines them into one index.

mod kind;
mod path;
mod sequence;

pub use kind::{type_similarity, TypeMatch};
pub use path::path_distance;
pub use sequence::sequence_ratio;

use crate::file_ref::FileRef;

/// Similarity of the two stems, in `[0, 1]`. Case-sensitive.
pub fn name_similarity(a: &FileRef, b: &FileRef) -> f64 {
    sequence_ratio(a.stem(), b.stem())
}
