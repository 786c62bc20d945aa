use crate::classify::{MimeResolver, TextClassifier};
use crate::config::{validate_threshold, RelinkConfig, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::file_ref::{FileRef, MissingFile};
use crate::hasher::{Blake3Hasher, ContentHasher};
use crate::matcher::{ExactMatcher, FuzzyMatcher, RelinkMatch, ScoredCandidate};
use crate::paths::{CurrentDirResolver, PathResolver};
use crate::scorer::Scorer;
use std::path::Path;
use tracing::{debug, warn};

/// Finds where a missing file went: exact identity first, similarity second.
///
/// All collaborators (path resolution, hashing, type detection) are
/// replaceable through the `with_*` builders. A `Relinker` holds no mutable
/// state and can be shared between threads.
pub struct Relinker {
    resolver: Box<dyn PathResolver>,
    hasher: Box<dyn ContentHasher>,
    scorer: Scorer,
    threshold: f64,
}

impl Relinker {
    pub fn new() -> Self {
        Self {
            resolver: Box::new(CurrentDirResolver),
            hasher: Box::new(Blake3Hasher),
            scorer: Scorer::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn from_config(config: &RelinkConfig) -> Result<Self> {
        Self::new().with_threshold(config.threshold)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    pub fn with_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_hasher(mut self, hasher: impl ContentHasher + 'static) -> Self {
        self.hasher = Box::new(hasher);
        self
    }

    pub fn with_mime_resolver(mut self, mime: MimeResolver) -> Self {
        self.scorer = self.scorer.with_mime_resolver(mime);
        self
    }

    pub fn with_text_classifier(mut self, text: impl TextClassifier + 'static) -> Self {
        self.scorer = self.scorer.with_text_classifier(text);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Resolve one path through the configured resolver.
    pub fn file_ref(&self, path: impl AsRef<Path>) -> Result<FileRef> {
        FileRef::resolve(path, self.resolver.as_ref())
    }

    /// Resolve many paths, dropping any that cannot be resolved.
    pub fn file_refs<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<FileRef> {
        paths
            .iter()
            .filter_map(|path| match self.file_ref(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!("Skipping candidate: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Exact match, falling back to the best fuzzy match.
    pub fn relink<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Option<RelinkMatch<'c>> {
        self.relink_perfect(missing, candidates).or_else(|| {
            debug!(
                "No exact match for {}, trying similarity",
                missing.file().name()
            );
            self.relink_guess(missing, candidates)
        })
    }

    /// Candidate sharing the missing file's hash and/or name.
    pub fn relink_perfect<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Option<RelinkMatch<'c>> {
        ExactMatcher::new(self.hasher.as_ref()).find(missing, candidates)
    }

    /// Most similar candidate at or above the threshold.
    pub fn relink_guess<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Option<RelinkMatch<'c>> {
        self.fuzzy().find(missing, candidates)
    }

    /// Every candidate at or above the threshold, most similar first.
    pub fn rank<'c>(
        &self,
        missing: &MissingFile,
        candidates: &'c [FileRef],
    ) -> Vec<ScoredCandidate<'c>> {
        self.fuzzy().rank(missing, candidates)
    }

    fn fuzzy(&self) -> FuzzyMatcher<'_> {
        FuzzyMatcher::new(&self.scorer).with_threshold(self.threshold)
    }
}

impl Default for Relinker {
    fn default() -> Self {
        Self::new()
    }
}
