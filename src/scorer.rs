use crate::classify::{MimeResolver, TextClassifier, Utf8TextClassifier};
use crate::file_ref::FileRef;
use crate::similarity::{name_similarity, path_distance, type_similarity, TypeMatch};

/// Each segment of path distance counts for a tenth, so directory moves weigh
/// less than renames or type changes.
pub const PATH_DAMPING: f64 = 0.1;

/// Every signal behind one composite index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub path_distance: usize,
    pub name_similarity: f64,
    pub type_match: TypeMatch,
    /// Mean of the three normalized signals, in `[0, 1]`.
    pub index: f64,
}

impl ScoreBreakdown {
    pub fn path_score(&self) -> f64 {
        path_score(self.path_distance)
    }
}

/// Map a path distance onto `(0, 1]`, 1 at distance 0.
pub fn path_score(distance: usize) -> f64 {
    1.0 / (1.0 + PATH_DAMPING * distance as f64)
}

/// Composite similarity of two files.
pub struct Scorer {
    mime: MimeResolver,
    text: Box<dyn TextClassifier>,
}

impl Scorer {
    pub fn new(mime: MimeResolver, text: Box<dyn TextClassifier>) -> Self {
        Self { mime, text }
    }

    pub fn with_mime_resolver(mut self, mime: MimeResolver) -> Self {
        self.mime = mime;
        self
    }

    pub fn with_text_classifier(mut self, text: impl TextClassifier + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    pub fn type_similarity(&self, a: &FileRef, b: &FileRef) -> TypeMatch {
        type_similarity(a, b, &self.mime, self.text.as_ref())
    }

    pub fn breakdown(&self, a: &FileRef, b: &FileRef) -> ScoreBreakdown {
        let distance = path_distance(a.absolute(), b.absolute());
        let name = name_similarity(a, b);
        let type_match = self.type_similarity(a, b);
        let index = (path_score(distance) + name + type_match.score()) / 3.0;

        ScoreBreakdown {
            path_distance: distance,
            name_similarity: name,
            type_match,
            index,
        }
    }

    pub fn diff_index(&self, a: &FileRef, b: &FileRef) -> f64 {
        self.breakdown(a, b).index
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(MimeResolver::default(), Box::new(Utf8TextClassifier))
    }
}
