use super::{MatchKind, RelinkMatch, Score, ScoredCandidate};
use crate::config::DEFAULT_THRESHOLD;
use crate::file_ref::{FileRef, MissingFile};
use crate::scorer::Scorer;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Picks the most similar candidate by composite index, provided it reaches
/// the threshold. Ties go to the candidate seen first.
pub struct FuzzyMatcher<'a> {
    scorer: &'a Scorer,
    threshold: f64,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(scorer: &'a Scorer) -> Self {
        Self {
            scorer,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Candidates scoring at least the threshold, best first. Equal scores
    /// keep their input order.
    pub fn rank<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Vec<ScoredCandidate<'c>> {
        let mut scored = self.passing(missing, candidates);
        // sort_by is stable
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .map(|(file, index)| ScoredCandidate {
                file,
                score: Score::Similarity(index),
            })
            .collect()
    }

    pub fn find<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Option<RelinkMatch<'c>> {
        let mut best: Option<(&'c FileRef, f64)> = None;
        for (file, index) in self.passing(missing, candidates) {
            // strictly greater: the first of equal scores stays
            if best.map_or(true, |(_, top)| index > top) {
                best = Some((file, index));
            }
        }

        match best {
            Some((file, index)) => {
                debug!(
                    "{}: best guess {} ({:.3})",
                    missing.file().name(),
                    file.absolute().display(),
                    index
                );
                Some(RelinkMatch {
                    file,
                    kind: MatchKind::Similarity,
                    score: Score::Similarity(index),
                })
            }
            None => {
                debug!(
                    "{}: no candidate reached {:.2}",
                    missing.file().name(),
                    self.threshold
                );
                None
            }
        }
    }

    /// Every candidate at or above the threshold, in input order.
    fn passing<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Vec<(&'c FileRef, f64)> {
        candidates
            .iter()
            .filter_map(|candidate| {
                let index = self.scorer.diff_index(missing.file(), candidate);
                trace!("{} -> {:.3}", candidate.absolute().display(), index);
                (index >= self.threshold).then_some((candidate, index))
            })
            .collect()
    }
}
