use super::{MatchKind, RelinkMatch, Score};
use crate::file_ref::{FileRef, MissingFile};
use crate::hasher::{digests_match, ContentHasher};
use crate::similarity::path_distance;
use ahash::AHashSet;
use tracing::{debug, trace, warn};

/// Finds candidates that share the missing file's content hash and/or name.
///
/// Precedence, first non-empty tier wins:
/// 1. same hash and same name
/// 2. same hash
/// 3. same name
///
/// Within a tier the candidate closest by path distance is chosen, the
/// earliest in input order on ties. When any candidate matches the hash the
/// name-only tier is never consulted.
pub struct ExactMatcher<'a> {
    hasher: &'a dyn ContentHasher,
}

impl<'a> ExactMatcher<'a> {
    pub fn new(hasher: &'a dyn ContentHasher) -> Self {
        Self { hasher }
    }

    pub fn find<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Option<RelinkMatch<'c>> {
        let target = missing.file();

        let same_name: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.same_name(target))
            .map(|(i, _)| i)
            .collect();

        let same_hash: Vec<usize> = match missing.recorded_hash() {
            Some(recorded) => self.same_hash(recorded, candidates),
            None => Vec::new(),
        };

        let name_set: AHashSet<usize> = same_name.iter().copied().collect();
        let same_hash_and_name: Vec<usize> = same_hash
            .iter()
            .copied()
            .filter(|i| name_set.contains(i))
            .collect();

        debug!(
            "{}: {} same name, {} same hash, {} both",
            target.name(),
            same_name.len(),
            same_hash.len(),
            same_hash_and_name.len()
        );

        let tiers = [
            (MatchKind::HashAndName, same_hash_and_name),
            (MatchKind::Hash, same_hash),
            (MatchKind::Name, same_name),
        ];

        tiers.into_iter().find_map(|(kind, pool)| {
            closest(target, candidates, &pool).map(|(file, distance)| RelinkMatch {
                file,
                kind,
                score: Score::Distance(distance),
            })
        })
    }

    /// Indices of candidates whose fresh digest equals `recorded`. Candidates
    /// that cannot be read are left out.
    fn same_hash(&self, recorded: &str, candidates: &[FileRef]) -> Vec<usize> {
        candidates
            .iter()
            .enumerate()
            .filter_map(|(i, candidate)| match self.hasher.hash_file(candidate.absolute()) {
                Ok(digest) => {
                    trace!("{} -> {}", candidate.absolute().display(), digest);
                    digests_match(recorded, &digest).then_some(i)
                }
                Err(e) => {
                    warn!(
                        "Skipping '{}' for hash comparison: {}",
                        candidate.absolute().display(),
                        e
                    );
                    None
                }
            })
            .collect()
    }
}

/// Pool member nearest to `target`; `min_by_key` keeps the first of equals.
fn closest<'c>(
    target: &FileRef,
    candidates: &'c [FileRef],
    pool: &[usize],
) -> Option<(&'c FileRef, usize)> {
    pool.iter()
        .map(|&i| {
            let candidate = &candidates[i];
            (candidate, path_distance(target.absolute(), candidate.absolute()))
        })
        .min_by_key(|(_, distance)| *distance)
}
